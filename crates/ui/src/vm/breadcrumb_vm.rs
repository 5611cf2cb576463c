use prep_core::model::Topic;

pub const ROOT_CRUMB_LABEL: &str = "Question Bank";
pub const ROOT_CRUMB_HREF: &str = "/topics";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrumbVm {
    pub label: String,
    /// `None` for the crumb of the page being viewed.
    pub href: Option<String>,
}

/// Crumbs for `path`, starting with the question bank root.
///
/// The `topics` segment is folded into the root crumb. Topic slugs show the
/// topic name; anything else is title-cased word by word.
#[must_use]
pub fn map_breadcrumbs(path: &str, topics: &[Topic]) -> Vec<CrumbVm> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut crumbs = vec![CrumbVm {
        label: ROOT_CRUMB_LABEL.to_owned(),
        href: Some(ROOT_CRUMB_HREF.to_owned()),
    }];
    for (index, segment) in segments.iter().enumerate() {
        if *segment == "topics" {
            continue;
        }
        let is_last = index + 1 == segments.len();
        crumbs.push(CrumbVm {
            label: segment_label(segment, topics),
            href: (!is_last).then(|| format!("/{}", segments[..=index].join("/"))),
        });
    }
    crumbs
}

fn segment_label(segment: &str, topics: &[Topic]) -> String {
    if let Some(topic) = topics.iter().find(|topic| topic.slug() == segment) {
        return topic.name().to_owned();
    }
    match segment {
        "question-bank" => ROOT_CRUMB_LABEL.to_owned(),
        _ => segment
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{TopicIcon, TopicId};

    fn topics() -> Vec<Topic> {
        vec![Topic::new(
            TopicId::new("hooks"),
            "react-hooks",
            "React Hooks",
            "Hooks.",
            TopicIcon::Anchor,
        )]
    }

    fn labels(crumbs: &[CrumbVm]) -> Vec<&str> {
        crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn topics_index_shows_only_the_root() {
        let crumbs = map_breadcrumbs("/topics", &topics());
        assert_eq!(labels(&crumbs), ["Question Bank"]);
        assert_eq!(crumbs[0].href.as_deref(), Some("/topics"));
    }

    #[test]
    fn topic_slug_maps_to_its_name_and_is_current() {
        let crumbs = map_breadcrumbs("/topics/react-hooks", &topics());
        assert_eq!(labels(&crumbs), ["Question Bank", "React Hooks"]);
        assert_eq!(crumbs[1].href, None);
    }

    #[test]
    fn unknown_segments_are_title_cased_and_linked_until_last() {
        let crumbs = map_breadcrumbs("/study-plans/weekly-review", &topics());
        assert_eq!(labels(&crumbs), ["Question Bank", "Study Plans", "Weekly Review"]);
        assert_eq!(crumbs[1].href.as_deref(), Some("/study-plans"));
        assert_eq!(crumbs[2].href, None);
    }

    #[test]
    fn root_path_has_a_single_crumb() {
        assert_eq!(labels(&map_breadcrumbs("/", &topics())), ["Question Bank"]);
    }
}
