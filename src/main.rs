use iced::widget::{button, column, container, scrollable, stack, text, text_editor, text_input};
use iced::widget::{Column, Space};
use iced::{event, window, Alignment, Element, Event, Font, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod gateway;
mod phone;
mod state;
mod ui;
mod upload;

use config::{InvalidFilePolicy, Settings};
use error::{SelectionError, SubmissionError, SubmitRejected, ValidationError};
use gateway::{Gateway, SimulatedGateway};
use state::data::ImageFile;
use state::form::{Form, Phase, SUCCESS_MESSAGE};
use ui::toast::Toasts;
use upload::{ImageSelector, Ticket};

/// Main application state
struct EvolutionConnect {
    settings: Settings,
    gateway: Arc<SimulatedGateway>,
    form: Form,
    selector: ImageSelector,
    /// Editor buffer behind the prompt; mirrored into `form` on every edit
    prompt: text_editor::Content,
    toasts: Toasts,
    /// Dropping a handle aborts its task
    read_task: Option<iced::task::Handle>,
    submit_task: Option<iced::task::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the drop zone
    PickImage,
    /// Files are hovering over the window
    DragEntered,
    /// Hovering files left the window without dropping
    DragLeft,
    FileDropped(PathBuf),
    /// Background read finished
    ImageLoaded(Ticket, Result<ImageFile, SelectionError>),
    PhoneChanged(String),
    PromptEdited(text_editor::Action),
    Submit,
    /// Gateway finished with the current submission
    Submitted(Result<(), SubmissionError>),
    DismissToast(u64),
}

impl EvolutionConnect {
    fn new() -> (Self, Task<Message>) {
        (Self::with_settings(Settings::load()), Task::none())
    }

    fn with_settings(settings: Settings) -> Self {
        let gateway = Arc::new(SimulatedGateway::new(settings.submit_delay()));

        info!(delay = ?gateway.delay(), "📱 Evolution Connect ready");

        EvolutionConnect {
            settings,
            gateway,
            form: Form::new(),
            selector: ImageSelector::new(),
            prompt: text_editor::Content::new(),
            toasts: Toasts::new(),
            read_task: None,
            submit_task: None,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                let picked = FileDialog::new()
                    .set_title("Selecione uma imagem")
                    .add_filter("Imagens", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                    .pick_file();

                match picked {
                    Some(path) => self.select_image(path),
                    None => Task::none(),
                }
            }
            Message::DragEntered => {
                self.selector.drag_entered();
                Task::none()
            }
            Message::DragLeft => {
                self.selector.drag_left();
                Task::none()
            }
            Message::FileDropped(path) => self.select_image(path),
            Message::ImageLoaded(ticket, result) => {
                match self.selector.complete(ticket, result) {
                    Ok(Some(file)) => {
                        self.read_task = None;
                        self.form.set_image(file);
                        Task::none()
                    }
                    Ok(None) => Task::none(),
                    Err(e) => {
                        self.read_task = None;
                        if let SelectionError::Read { path, reason } = &e {
                            warn!(path = %path.display(), %reason, "⚠️  could not read image");
                        }
                        self.notify_error(e.to_string())
                    }
                }
            }
            Message::PhoneChanged(raw) => {
                self.form.set_phone(&raw);
                Task::none()
            }
            Message::PromptEdited(action) => {
                self.prompt.perform(action);
                self.form.set_prompt(self.prompt.text());
                Task::none()
            }
            Message::Submit => match self.form.begin_submit() {
                Ok(submission) => {
                    let gateway = Arc::clone(&self.gateway);
                    let (task, handle) = Task::perform(
                        async move { gateway.deliver(submission).await },
                        Message::Submitted,
                    )
                    .abortable();

                    self.submit_task = Some(handle.abort_on_drop());
                    task
                }
                Err(SubmitRejected::Busy) => Task::none(),
                Err(SubmitRejected::Invalid(e)) => {
                    match &e {
                        ValidationError::InvalidPhone { digits } => {
                            info!(digits = *digits, "submission blocked: phone too short")
                        }
                        _ => info!(?e, "submission blocked by validation"),
                    }
                    self.notify_error(e.to_string())
                }
            },
            Message::Submitted(outcome) => {
                self.submit_task = None;
                match self.form.finish_submit(outcome) {
                    Ok(()) => {
                        self.selector.clear();
                        self.read_task = None;
                        self.prompt = text_editor::Content::new();
                        self.notify_success(SUCCESS_MESSAGE)
                    }
                    Err(e) => self.notify_error(e.to_string()),
                }
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
        }
    }

    /// Validate a picked or dropped file and start reading it
    fn select_image(&mut self, path: PathBuf) -> Task<Message> {
        match self.begin_selection(path) {
            Ok(task) => task,
            Err(e) => {
                ui::alert::invalid_file(&e);
                Task::none()
            }
        }
    }

    /// Start the read for an accepted file, or apply the invalid-file policy
    fn begin_selection(&mut self, path: PathBuf) -> Result<Task<Message>, SelectionError> {
        match self.selector.select(path) {
            Ok(request) => {
                let ticket = request.ticket;
                let (task, handle) = Task::perform(upload::reader::load(request), move |result| {
                    Message::ImageLoaded(ticket, result)
                })
                .abortable();

                // Replacing the handle aborts the superseded read
                self.read_task = Some(handle.abort_on_drop());
                Ok(task)
            }
            Err(e) => {
                if let SelectionError::InvalidFileType { path, media_type } = &e {
                    warn!(path = %path.display(), %media_type, "rejected non-image selection");
                }
                if self.settings.on_invalid_file == InvalidFilePolicy::ClearSelection {
                    self.selector.clear();
                    self.form.clear_image();
                    self.read_task = None;
                }
                Err(e)
            }
        }
    }

    fn notify_success(&mut self, message: &str) -> Task<Message> {
        let id = self.toasts.success(message);
        self.expire_toast(id)
    }

    fn notify_error(&mut self, message: String) -> Task<Message> {
        let id = self.toasts.error(message);
        self.expire_toast(id)
    }

    fn expire_toast(&self, id: u64) -> Task<Message> {
        let duration = self.settings.toast_duration();
        Task::perform(tokio::time::sleep(duration), move |_| Message::DismissToast(id))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("WhatsApp Evolution Connect").size(40).font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            }),
            text("Envie imagens com prompts personalizados diretamente para o WhatsApp").size(18),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        let submitting = self.form.phase() == Phase::Submitting;
        let submit_label = if submitting {
            "Enviando..."
        } else {
            "➤  Enviar para WhatsApp"
        };

        let form: Column<Message> = column![
            text("Imagem").size(14),
            ui::dropzone::view(&self.selector, Message::PickImage),
            text(selected_label(&self.form)).size(12),
            Space::with_height(8.0),
            text("Número de Telefone").size(14),
            text_input("(00) 00000-0000", self.form.phone())
                .on_input(Message::PhoneChanged)
                .on_submit(Message::Submit)
                .padding(10),
            Space::with_height(8.0),
            text("Prompt").size(14),
            text_editor(&self.prompt)
                .placeholder("Digite seu prompt aqui...")
                .on_action(Message::PromptEdited)
                .height(128.0)
                .padding(10),
            text(format!("{} caracteres", self.form.prompt().chars().count())).size(12),
            Space::with_height(8.0),
            button(
                container(text(submit_label).size(18))
                    .center_x(Length::Fill)
            )
            .on_press_maybe((!submitting).then_some(Message::Submit))
            .width(Length::Fill)
            .padding(16),
        ]
        .spacing(8)
        .max_width(640.0);

        let footer = text("© 2025 WhatsApp Evolution Connect. Todos os direitos reservados.").size(12);

        let page = scrollable(
            column![header, form, footer]
                .spacing(40)
                .padding(40)
                .width(Length::Fill)
                .align_x(Alignment::Center),
        );

        stack![page, self.toasts.view(Message::DismissToast)].into()
    }

    /// Window file drag/drop events
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::DragEntered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DragLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Name and size of the selected file, shown under the drop zone
fn selected_label(form: &Form) -> String {
    match form.image() {
        Some(file) => format!("{} · {} KB", file.name, file.len().div_ceil(1024)),
        None => String::new(),
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("evolution_connect=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    iced::application(
        "WhatsApp Evolution Connect",
        EvolutionConnect::update,
        EvolutionConnect::view,
    )
    .subscription(EvolutionConnect::subscription)
    .theme(EvolutionConnect::theme)
    .window_size((760.0, 900.0))
    .centered()
    .run_with(EvolutionConnect::new)
}
