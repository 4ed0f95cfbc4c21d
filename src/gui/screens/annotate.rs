use iced::{
    ContentFit, Element, Length, Task,
    widget::{
        button, canvas, column, container, image, pick_list, scrollable, stack, text,
    },
};
use log::{error, info, warn};
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

use crate::{
    core::{
        DecodedImage, ExportOutcome, ImageSet, LoadTicket, NavOutcome, Session, loader,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{AnnotationCanvas, layout},
    },
    models::Point,
};

const LAST_IMAGE_NOTICE: &str = "You are already at the last image.";

#[derive(Debug, Clone)]
pub struct AnnotateScreen {
    session: Session,
    image: Option<image::Handle>,
    status: String,
}

#[derive(Debug, Clone)]
pub enum AnnotateMessage {
    LabelSelected(String),
    Pressed(Point),
    Moved(Point),
    Released(Point),
    Save,
    DeleteLast,
    Next,
    Decoded(LoadTicket, Result<DecodedImage, String>),
    None,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    BackToStart,
}

impl AnnotateScreen {
    pub fn new(state: &AppState, images: ImageSet) -> (Self, Task<ScreenMessage<Self>>) {
        let mut session = Session::new(
            state.settings.label_set(),
            state.settings.output_dir.clone(),
        );
        let ticket = session.select_images(images);
        let mut screen = Self {
            session,
            image: None,
            status: "Loading...".to_string(),
        };
        let task = match ticket {
            Some(ticket) => screen.load(ticket),
            None => Task::none(),
        };
        (screen, task)
    }

    /// Start decoding the image a ticket points at
    fn load(&mut self, ticket: LoadTicket) -> Task<ScreenMessage<Self>> {
        let Some(path) = self.session.path_for(ticket).map(|p| p.to_path_buf()) else {
            return Task::none();
        };
        info!("Loading {}", path.display());
        Task::perform(loader::decode_async(path), move |result| {
            ScreenMessage::ScreenMessage(AnnotateMessage::Decoded(
                ticket,
                result.map_err(|e| format!("{:#}", e)),
            ))
        })
    }

    fn describe_export(outcome: &ExportOutcome) -> String {
        match outcome {
            ExportOutcome::Saved(path) => format!("Saved {}", path.display()),
            ExportOutcome::NothingLoaded => "No image loaded, nothing saved".to_string(),
        }
    }

    fn canvas_view(&self) -> Element<'_, ScreenMessage<Self>> {
        let (Some(handle), Some(scene)) = (&self.image, self.session.scene()) else {
            return container(text(self.status.as_str()))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        };

        let width = Length::Fixed(scene.width as f32);
        let height = Length::Fixed(scene.height as f32);
        let dragging = self.session.is_dragging();

        let picture = image(handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Fill);
        let overlay: Element<'_, AnnotateMessage> = canvas(AnnotationCanvas::new(scene, dragging))
            .width(width)
            .height(height)
            .into();

        scrollable(stack![picture, overlay.map(ScreenMessage::ScreenMessage)])
            .direction(scrollable::Direction::Both {
                vertical: scrollable::Scrollbar::default(),
                horizontal: scrollable::Scrollbar::default(),
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn sidebar(&self) -> Element<'_, ScreenMessage<Self>> {
        let labels = pick_list(
            self.session.labels().labels(),
            Some(self.session.current_label().to_string()),
            |label| ScreenMessage::ScreenMessage(AnnotateMessage::LabelSelected(label)),
        );

        let file_name = self
            .session
            .current_image()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let loading = self.session.is_loading();

        column![
            text("Label"),
            labels,
            button("Save").on_press_maybe(
                (!loading).then_some(ScreenMessage::ScreenMessage(AnnotateMessage::Save))
            ),
            button("Delete").on_press_maybe(
                (!self.session.annotations().is_empty())
                    .then_some(ScreenMessage::ScreenMessage(AnnotateMessage::DeleteLast))
            ),
            button("Next").on_press_maybe(
                (!loading).then_some(ScreenMessage::ScreenMessage(AnnotateMessage::Next))
            ),
            button("Open...").on_press(ScreenMessage::ParentMessage(ParentMessage::BackToStart)),
            text(file_name),
            text(format!("{} box(es)", self.session.annotations().len())),
            text(self.status.as_str()).size(12),
        ]
        .spacing(10)
        .padding(10)
        .into()
    }
}

impl Screen for AnnotateScreen {
    type Message = AnnotateMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let images = self.session.images();
        let progress = (!images.is_empty()).then(|| (images.current_index() + 1, images.len()));
        layout(self.sidebar(), self.canvas_view(), progress)
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            AnnotateMessage::LabelSelected(label) => {
                self.session.set_label(label);
                Task::none()
            }
            AnnotateMessage::Pressed(at) => {
                // Boxes drawn now would be dropped once the decode lands
                if !self.session.is_loading() {
                    self.session.press(at);
                }
                Task::none()
            }
            AnnotateMessage::Moved(at) => {
                self.session.move_to(at);
                Task::none()
            }
            AnnotateMessage::Released(at) => {
                self.session.release(at);
                Task::none()
            }
            AnnotateMessage::DeleteLast => {
                if self.session.delete_last().is_some() {
                    self.status = "Removed last box".to_string();
                }
                Task::none()
            }
            AnnotateMessage::Save => {
                self.status = match self.session.export() {
                    Ok(outcome) => Self::describe_export(&outcome),
                    Err(e) => {
                        error!("Export failed: {:#}", e);
                        format!("Export failed: {}", e)
                    }
                };
                Task::none()
            }
            AnnotateMessage::Next => match self.session.next() {
                Ok(NavOutcome::Advanced { exported, ticket }) => {
                    self.status = Self::describe_export(&exported);
                    self.load(ticket)
                }
                Ok(NavOutcome::AtLastImage) => Task::perform(
                    AsyncMessageDialog::new()
                        .set_level(MessageLevel::Warning)
                        .set_title("boxlabel")
                        .set_description(LAST_IMAGE_NOTICE)
                        .set_buttons(MessageButtons::Ok)
                        .show(),
                    |_| ScreenMessage::ScreenMessage(AnnotateMessage::None),
                ),
                Ok(NavOutcome::Loading) => {
                    self.status = "Still loading, try again in a moment".to_string();
                    Task::none()
                }
                Err(e) => {
                    error!("Export before advancing failed: {:#}", e);
                    self.status = format!("Export failed, staying on this image: {}", e);
                    Task::none()
                }
            },
            AnnotateMessage::Decoded(ticket, Ok(decoded)) => {
                let (width, height) = (decoded.width(), decoded.height());
                if self.session.finish_load(ticket, width, height) {
                    self.image = Some(image::Handle::from_rgba(
                        width,
                        height,
                        decoded.pixels.into_raw(),
                    ));
                    self.status = format!("{} ({}x{})", decoded.path.display(), width, height);
                }
                Task::none()
            }
            AnnotateMessage::Decoded(ticket, Err(e)) => {
                if self.session.fail_load(ticket) {
                    warn!("Could not display image #{}: {}", ticket.index(), e);
                    self.image = None;
                    self.status = e;
                }
                Task::none()
            }
            AnnotateMessage::None => Task::none(),
        }
    }
}
