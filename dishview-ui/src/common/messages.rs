use crate::domains::navigator::NavigatorMessage;

/// Root message routed by [`crate::update::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Navigator(NavigatorMessage),

    // Launcher
    OpenMenu,
    DismissTips,
    TipsDismissalSaved(Result<(), String>),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigator(_) => "Navigator",
            Self::OpenMenu => "OpenMenu",
            Self::DismissTips => "DismissTips",
            Self::TipsDismissalSaved(_) => "TipsDismissalSaved",
        }
    }
}
