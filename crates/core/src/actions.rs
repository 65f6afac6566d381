use std::fmt::{Display, Formatter};

/// The fixed set of operations offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    InitializeRepository,
    AddRemote,
    StageChanges,
    CommitChanges,
    PushToRemote,
    PullFromRemote,
    ShowStatus,
    ShowBranch,
    ShowLog,
    MergeBranch,
    ViewDiff,
}

impl MenuAction {
    /// Every action, in menu order.
    pub const ALL: [MenuAction; 11] = [
        MenuAction::InitializeRepository,
        MenuAction::AddRemote,
        MenuAction::StageChanges,
        MenuAction::CommitChanges,
        MenuAction::PushToRemote,
        MenuAction::PullFromRemote,
        MenuAction::ShowStatus,
        MenuAction::ShowBranch,
        MenuAction::ShowLog,
        MenuAction::MergeBranch,
        MenuAction::ViewDiff,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::InitializeRepository => "Initialize Repository",
            MenuAction::AddRemote => "Add Remote",
            MenuAction::StageChanges => "Stage Changes",
            MenuAction::CommitChanges => "Commit Changes",
            MenuAction::PushToRemote => "Push to Remote",
            MenuAction::PullFromRemote => "Pull from Remote",
            MenuAction::ShowStatus => "Show Status",
            MenuAction::ShowBranch => "Show Branch",
            MenuAction::ShowLog => "Show Log",
            MenuAction::MergeBranch => "Merge Branch",
            MenuAction::ViewDiff => "View Diff",
        }
    }

    /// Looks an action up by its menu label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<MenuAction> {
        MenuAction::ALL
            .into_iter()
            .find(|action| action.label() == label)
    }
}

impl Display for MenuAction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.label())
    }
}
