pub mod confirmation_modal;
pub mod event_photo_picker;
pub mod toast;

pub use confirmation_modal::ConfirmationModal;
pub use event_photo_picker::EventPhotoPicker;
pub use toast::ToastContainer;
