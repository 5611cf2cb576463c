mod home;
mod not_found;
mod topic;
mod topics;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use not_found::{NotFoundPanel, NotFoundView};
pub use topic::TopicView;
pub use topics::TopicsView;
