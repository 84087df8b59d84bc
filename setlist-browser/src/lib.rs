pub mod browser;
pub mod export;
pub mod inquiry;
pub mod preferences;
pub mod scroll;
pub mod view;

pub use browser::Browser;
pub use export::{CsvExport, InquiryLink};
pub use inquiry::{InquiryForm, InquiryOutcome, LogSender, Notification, NotificationSender};
pub use preferences::{FileStore, MemoryStore, PreferenceStore};
pub use scroll::{PendingScroll, ScrollAnchor, Viewport};
pub use view::{SectionGroup, TitleCollator};
