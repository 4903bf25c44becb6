//! Actions dispatched through the app's internal channel.

use crate::data::AppData;
use crate::screen::ScreenId;

#[derive(Debug)]
pub enum Action {
    Quit,
    Tick,
    Render,
    Resize(u16, u16),
    SwitchScreen(ScreenId),
    ToggleHelp,

    /// Drop every cached value and refetch.
    ForceRefresh,

    /// A background refresh finished.
    DataLoaded(Box<AppData>),

    /// Sign-in attempt finished.
    SignedIn(String),
    SignInFailed(String),

    /// The backend answered 401 mid-session.
    SessionExpired,

    /// Non-fatal error for the status line.
    Error(String),
}
