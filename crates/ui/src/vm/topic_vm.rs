use prep_core::model::{Topic, TopicIcon};
use services::{ProgressSummary, TopicProgress};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon: TopicIcon,
    pub progress: ProgressSummary,
}

/// One card per topic, in catalog order. Topics without a progress row show 0%.
#[must_use]
pub fn map_topic_cards(topics: &[Topic], progress: &[TopicProgress]) -> Vec<TopicCardVm> {
    topics
        .iter()
        .map(|topic| TopicCardVm {
            slug: topic.slug().to_owned(),
            name: topic.name().to_owned(),
            description: topic.description().to_owned(),
            icon: topic.icon(),
            progress: progress
                .iter()
                .find(|row| &row.topic_id == topic.id())
                .map(|row| row.summary)
                .unwrap_or_default(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarItemVm {
    pub slug: String,
    pub name: String,
    pub icon: TopicIcon,
    pub active: bool,
}

#[must_use]
pub fn map_sidebar_items(topics: &[Topic], active_slug: Option<&str>) -> Vec<SidebarItemVm> {
    topics
        .iter()
        .map(|topic| SidebarItemVm {
            slug: topic.slug().to_owned(),
            name: topic.name().to_owned(),
            icon: topic.icon(),
            active: active_slug == Some(topic.slug()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::TopicId;

    fn topics() -> Vec<Topic> {
        vec![
            Topic::new(TopicId::new("hooks"), "react-hooks", "React Hooks", "", TopicIcon::Anchor),
            Topic::new(TopicId::new("perf"), "performance", "Performance", "", TopicIcon::Zap),
        ]
    }

    #[test]
    fn cards_pick_up_matching_progress() {
        let rows = vec![TopicProgress {
            topic_id: TopicId::new("perf"),
            summary: ProgressSummary::new(1, 2),
        }];
        let cards = map_topic_cards(&topics(), &rows);
        assert_eq!(cards[0].progress.percent, 0);
        assert_eq!(cards[1].progress.percent, 50);
        assert_eq!(cards[1].icon, TopicIcon::Zap);
    }

    #[test]
    fn only_the_current_topic_is_active() {
        let items = map_sidebar_items(&topics(), Some("performance"));
        assert!(!items[0].active);
        assert!(items[1].active);
        assert!(map_sidebar_items(&topics(), None).iter().all(|i| !i.active));
    }
}
