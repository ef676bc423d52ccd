//! Controller - the interactive session as an explicit state machine.
//!
//! Each pass through [`Controller::run`]'s loop handles one state and picks
//! the next one. Every failure is reported on screen and leads back to the
//! main menu; the only error that ends the loop early is a failure to talk
//! to the terminal itself.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::choice::{is_affirmative, MenuChoice};
use super::prompt::Prompter;
use super::screens;
use crate::error::InvalidSelectionError;
use crate::output_name::{OutputName, TokenSource};
use crate::payload::{self, Payload, PayloadKind, PayloadRequest, SocialPlatform};
use crate::render::QrRenderer;
use crate::session::{self, Session};

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq)]
enum State {
    /// Show the main menu, with an error notice from the previous attempt.
    MainMenu { notice: Option<String> },
    CollectingFields(PayloadKind),
    Formatting(PayloadRequest),
    Rendering {
        request: PayloadRequest,
        payload: Payload,
    },
    PromptRepeat,
    SessionSummary,
}

/// Drives prompts, formatting and rendering until the user leaves.
pub struct Controller<'a, R, I, O> {
    session: &'a mut Session,
    renderer: &'a R,
    prompter: Prompter<I, O>,
    output_dir: PathBuf,
    tokens: TokenSource,
    clear_screen: bool,
}

impl<'a, R, I, O> Controller<'a, R, I, O>
where
    R: QrRenderer,
    I: BufRead,
    O: Write,
{
    pub fn new(
        session: &'a mut Session,
        renderer: &'a R,
        prompter: Prompter<I, O>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            session,
            renderer,
            prompter,
            output_dir: output_dir.into(),
            tokens: TokenSource::new(),
            clear_screen: false,
        }
    }

    /// Clear the terminal before each screen.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Give back the output stream, e.g. to inspect what was printed.
    pub fn into_output(self) -> O {
        self.prompter.into_output()
    }

    /// Run the session until the user exits or input ends.
    ///
    /// # Errors
    /// Only I/O errors on the terminal streams are returned.
    pub fn run(&mut self) -> io::Result<()> {
        self.prepare_output_dir()?;

        let mut state = State::MainMenu { notice: None };
        loop {
            state = match state {
                State::MainMenu { notice } => self.main_menu(notice.as_deref())?,
                State::CollectingFields(kind) => self.collect_fields(kind)?,
                State::Formatting(request) => self.format(request),
                State::Rendering { request, payload } => self.render(&request, &payload)?,
                State::PromptRepeat => self.prompt_repeat()?,
                State::SessionSummary => {
                    self.summary()?;
                    return Ok(());
                }
            };
        }
    }

    fn prepare_output_dir(&mut self) -> io::Result<()> {
        if let Err(e) = session::ensure_output_dir(&self.output_dir) {
            log::warn!("{}", e);
            screens::warning(self.prompter.output(), &e.to_string())?;
        }
        Ok(())
    }

    fn screen_start(&mut self) -> io::Result<()> {
        let out = self.prompter.output();
        if self.clear_screen {
            screens::clear(out)?;
        }
        screens::title(out)
    }

    fn main_menu(&mut self, notice: Option<&str>) -> io::Result<State> {
        self.screen_start()?;
        if let Some(notice) = notice {
            screens::error(self.prompter.output(), notice)?;
        }
        screens::main_menu(self.prompter.output())?;

        let Some(answer) = self.prompter.ask(&screens::main_menu_prompt())? else {
            return Ok(State::SessionSummary);
        };

        Ok(match MenuChoice::parse(&answer) {
            Ok(MenuChoice::Generate(kind)) => State::CollectingFields(kind),
            Ok(MenuChoice::Exit) => State::SessionSummary,
            Err(e) => {
                log::debug!("{}", e);
                State::MainMenu {
                    notice: Some(e.to_string()),
                }
            }
        })
    }

    fn collect_fields(&mut self, kind: PayloadKind) -> io::Result<State> {
        self.screen_start()?;
        screens::kind_header(self.prompter.output(), kind)?;

        let Some(request) = self.collect_request(kind)? else {
            return Ok(State::SessionSummary);
        };

        Ok(match request.validate() {
            Ok(()) => State::Formatting(request),
            Err(e) => {
                log::info!("Rejected request: {}", e);
                State::MainMenu {
                    notice: Some(e.to_string()),
                }
            }
        })
    }

    /// Ask each field of `kind` in order. `None` means input ended.
    fn collect_request(&mut self, kind: PayloadKind) -> io::Result<Option<PayloadRequest>> {
        let p = &mut self.prompter;

        let request = match kind {
            PayloadKind::Url => {
                let Some(url) = p.ask("Enter the URL (e.g. https://www.example.com): ")? else {
                    return Ok(None);
                };
                PayloadRequest::Url { url }
            }
            PayloadKind::Text => {
                let Some(text) = p.ask("Enter your message: ")? else {
                    return Ok(None);
                };
                PayloadRequest::Text { text }
            }
            PayloadKind::Contact => {
                let Some(name) = p.ask("Full name: ")? else {
                    return Ok(None);
                };
                let Some(phone) = p.ask("Phone: ")? else {
                    return Ok(None);
                };
                let Some(email) = p.ask_optional("Email (optional): ")? else {
                    return Ok(None);
                };
                let Some(company) = p.ask_optional("Company (optional): ")? else {
                    return Ok(None);
                };
                PayloadRequest::Contact {
                    name,
                    phone,
                    email,
                    company,
                }
            }
            PayloadKind::Email => {
                let Some(recipient) = p.ask("Recipient email: ")? else {
                    return Ok(None);
                };
                let Some(subject) = p.ask_optional("Subject (optional): ")? else {
                    return Ok(None);
                };
                let Some(body) = p.ask_optional("Message (optional): ")? else {
                    return Ok(None);
                };
                PayloadRequest::Email {
                    recipient,
                    subject,
                    body,
                }
            }
            PayloadKind::Sms => {
                let Some(number) = p.ask("Phone number: ")? else {
                    return Ok(None);
                };
                let Some(message) = p.ask_optional("Message (optional): ")? else {
                    return Ok(None);
                };
                PayloadRequest::Sms { number, message }
            }
            PayloadKind::Wifi => {
                let Some(ssid) = p.ask("Network name (SSID): ")? else {
                    return Ok(None);
                };
                let Some(password) = p.ask("Password: ")? else {
                    return Ok(None);
                };
                let Some(security) =
                    p.ask_optional("Security type (WPA/WEP/nopass) - press Enter for WPA: ")?
                else {
                    return Ok(None);
                };
                PayloadRequest::Wifi {
                    ssid,
                    password,
                    security,
                }
            }
            PayloadKind::Location => {
                let Some(latitude) = p.ask("Latitude (e.g. 4.6097): ")? else {
                    return Ok(None);
                };
                let Some(longitude) = p.ask("Longitude (e.g. -74.0817): ")? else {
                    return Ok(None);
                };
                let Some(label) = p.ask_optional("Place name (optional): ")? else {
                    return Ok(None);
                };
                PayloadRequest::Location {
                    latitude,
                    longitude,
                    label,
                }
            }
            PayloadKind::Social => {
                let Some(platform) = self.choose_platform()? else {
                    return Ok(None);
                };
                let p = &mut self.prompter;
                let Some(handle) = p.ask(platform.handle_prompt())? else {
                    return Ok(None);
                };
                let message = if platform.supports_message() {
                    let Some(message) = p.ask_optional("Predefined message (optional): ")? else {
                        return Ok(None);
                    };
                    message
                } else {
                    None
                };
                PayloadRequest::Social {
                    platform,
                    handle,
                    message,
                }
            }
        };

        Ok(Some(request))
    }

    /// Social sub-menu; re-asks until the answer is in range.
    fn choose_platform(&mut self) -> io::Result<Option<SocialPlatform>> {
        loop {
            screens::social_menu(self.prompter.output())?;
            let Some(answer) = self.prompter.ask(&screens::social_menu_prompt())? else {
                return Ok(None);
            };
            match SocialPlatform::from_choice(&answer) {
                Ok(platform) => return Ok(Some(platform)),
                Err(e) => self.report_invalid_selection(&e)?,
            }
        }
    }

    fn report_invalid_selection(&mut self, e: &InvalidSelectionError) -> io::Result<()> {
        log::debug!("{}", e);
        screens::error(self.prompter.output(), &e.to_string())
    }

    fn format(&mut self, request: PayloadRequest) -> State {
        match payload::format(&request) {
            Ok(payload) => State::Rendering { request, payload },
            Err(e) => {
                log::info!("Rejected request: {}", e);
                State::MainMenu {
                    notice: Some(e.to_string()),
                }
            }
        }
    }

    fn render(&mut self, request: &PayloadRequest, payload: &Payload) -> io::Result<State> {
        screens::generating(self.prompter.output())?;
        self.prepare_output_dir()?;

        let name = OutputName::new(request, self.tokens.next_token());
        let path = name.image_path(&self.output_dir);
        let kind = request.kind();

        let rendered = self
            .renderer
            .render_terminal(payload)
            .and_then(|terminal| {
                let width = self.renderer.render_png(payload, &path)?;
                Ok((terminal, width))
            });

        let (terminal, width) = match rendered {
            Ok(rendered) => rendered,
            Err(e) => {
                log::error!("Failed to render {} QR code to {}: {}", kind, path.display(), e);
                return Ok(State::MainMenu {
                    notice: Some(format!("Failed to generate the QR code: {}", e)),
                });
            }
        };

        log::info!("Generated {} QR code at {}", kind, path.display());
        self.session.record(kind, path.clone());
        screens::render_report(
            self.prompter.output(),
            &terminal,
            &path,
            kind,
            width,
            payload,
        )?;
        Ok(State::PromptRepeat)
    }

    fn prompt_repeat(&mut self) -> io::Result<State> {
        Ok(match self.prompter.ask(screens::repeat_prompt())? {
            Some(answer) if is_affirmative(&answer) => State::MainMenu { notice: None },
            _ => State::SessionSummary,
        })
    }

    fn summary(&mut self) -> io::Result<()> {
        self.screen_start()?;
        screens::summary(self.prompter.output(), self.session, &self.output_dir)
    }
}
