//! # TUI Components
//!
//! All widgets of the location screen. Each one is stateless and
//! props-based: it receives everything it draws as struct fields
//! (usually borrowed from the presenter's `RenderedView`) and renders
//! into the `Rect` it is given.
//!
//! ```text
//! components/
//! ├── mod.rs               (this file)
//! ├── title_bar.rs         (Top status bar)
//! ├── loading_view.rs      (Spinner + status, no controls)
//! ├── error_view.rs        (Error message + retry)
//! ├── map_view.rs          (Canvas map + markers)
//! ├── info_panel.rs        (Coordinates overlay)
//! ├── control_button.rs    (Retry / refresh pill)
//! └── permission_dialog.rs (Modal permission prompt)
//! ```
//!
//! Co-location: each file holds its props, rendering, and tests.

pub mod control_button;
pub mod error_view;
pub mod info_panel;
pub mod loading_view;
pub mod map_view;
pub mod permission_dialog;
mod title_bar;

pub use control_button::ControlButton;
pub use error_view::ErrorView;
pub use info_panel::InfoPanel;
pub use loading_view::LoadingView;
pub use map_view::MapView;
pub use permission_dialog::PermissionDialog;
pub use title_bar::TitleBar;
