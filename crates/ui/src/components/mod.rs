mod breadcrumbs;
mod code_viewer;
mod difficulty_badge;
mod icon;
mod progress_bar;
mod question_card;
mod question_list;
mod side_panel;
mod sidebar;
mod topic_grid;

pub use breadcrumbs::Breadcrumbs;
pub use code_viewer::CodeViewer;
pub use difficulty_badge::DifficultyBadge;
pub use icon::{Glyph, GlyphSvg, TopicIconSvg};
pub use progress_bar::ProgressBar;
pub use question_card::QuestionCard;
pub use question_list::QuestionList;
pub use side_panel::{PanelContent, SidePanel};
pub use sidebar::Sidebar;
pub use topic_grid::TopicGrid;
