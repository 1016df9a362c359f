use super::deck::Deck;
use super::slide::{Layout, Slide, SlideId, TextAlign, ThemeMode};

/// Deck shown on first launch and whenever persisted state is unusable.
pub fn starter_deck() -> Deck {
    let mut title = Slide::new(SlideId::new("1"), Layout::Title, "PRESENTATION TITLE");
    title.subtitle = Some("Subtitle or Presenter Name".into());
    title.points = vec!["Brief introduction or context".into(), "Date / Year".into()];
    title.theme_mode = Some(ThemeMode::Light);

    let mut overview = Slide::new(SlideId::new("2"), Layout::Content, "Topic Overview");
    overview.subtitle = Some("Key Discussion Points".into());
    overview.points = vec![
        "<b>First Main Point</b>: Description of the concept.".into(),
        "<b>Second Main Point</b>: Further elaboration or data.".into(),
        "<b>Conclusion</b>: Summary of this section.".into(),
    ];
    overview.theme_mode = Some(ThemeMode::Light);
    overview.text_align = Some(TextAlign::Left);

    let mut metric = Slide::new(SlideId::new("3"), Layout::BigNumber, "Key Metric");
    metric.subtitle = Some("Explanation of the statistic".into());
    metric.points = vec!["95%".into(), "Growth year over year".into()];
    metric.theme_mode = Some(ThemeMode::Light);
    metric.text_align = Some(TextAlign::Left);

    Deck::from_trusted(vec![title, overview, metric])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_has_three_light_slides() {
        let deck = starter_deck();
        let ids: Vec<_> = deck.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(deck
            .iter()
            .all(|s| s.theme_mode == Some(ThemeMode::Light)));
        assert_eq!(deck.slides()[2].layout, Layout::BigNumber);
    }
}
