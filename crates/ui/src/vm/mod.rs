mod breadcrumb_vm;
mod markdown_vm;
mod question_vm;
mod topic_vm;

pub use breadcrumb_vm::{CrumbVm, ROOT_CRUMB_HREF, ROOT_CRUMB_LABEL, map_breadcrumbs};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use question_vm::{
    CodeTab, DifficultyFilter, EMPTY_FILTER_MESSAGE, MistakeMarkerVm, completion_label,
    filter_questions, map_mistake_markers, mistake_toggle_label, questions_heading,
};
pub use topic_vm::{SidebarItemVm, TopicCardVm, map_sidebar_items, map_topic_cards};
