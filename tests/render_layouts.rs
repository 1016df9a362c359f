mod common;

use common::{bare, items, ALL_LAYOUTS};
use slidegen::model::{Layout, Slide, SlideItem, TextAlign, ThemeMode};
use slidegen::render::{
    render, render_at, Node, RenderedSlide, EMPTY_TABLE, GALLERY_SLOTS, RIGHT_COLUMN_PLACEHOLDER,
    TIMELINE_SLOTS, UNRECOGNIZED_MESSAGE,
};

fn title_texts(slide: &Slide) -> Vec<String> {
    render(slide, 1, 1)
        .root
        .find_all_role("title")
        .iter()
        .map(|element| element.text_content().trim().to_string())
        .collect()
}

#[test]
fn every_layout_renders_title_with_no_optional_fields() {
    for layout in ALL_LAYOUTS {
        let slide = bare(layout.clone(), "Plain Title");
        let titles = title_texts(&slide);
        assert!(
            titles.iter().any(|t| t.contains("Plain Title")),
            "{} did not render its title: {:?}",
            layout.as_str(),
            titles
        );
    }
}

#[test]
fn every_layout_strips_markup_from_title_text() {
    for layout in ALL_LAYOUTS {
        let slide = bare(layout.clone(), "<b>Bold</b> and <i>it</i>");
        let rendered = render(&slide, 1, 1);
        assert!(
            rendered.text_content().contains("Bold and it"),
            "{} lost title text",
            layout.as_str()
        );
        assert!(
            rendered.to_html().contains("<b>Bold</b>"),
            "{} dropped allowed markup",
            layout.as_str()
        );
    }
}

#[test]
fn unknown_markup_is_escaped() {
    let slide = bare(Layout::Content, "<script>x</script>");
    let html = render(&slide, 1, 1).to_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn unrecognized_layout_uses_fallback() {
    let mut slide = bare(Layout::Content, "Mystery");
    slide.layout = Layout::from_token("hologram");
    let rendered = render(&slide, 1, 1);
    let message = rendered.root.find_role("unrecognized").expect("fallback message");
    assert_eq!(message.text_content(), UNRECOGNIZED_MESSAGE);
    assert!(rendered.text_content().contains("Mystery"));
}

#[test]
fn timeline_shows_first_four_items_in_order() {
    let mut slide = bare(Layout::Timeline, "Roadmap");
    slide.items = Some(items(6));
    let rendered = render(&slide, 1, 1);
    let shown: Vec<String> = rendered
        .root
        .find_all_role("timeline-title")
        .iter()
        .map(|e| e.text_content())
        .collect();
    assert_eq!(shown, vec!["Item 1", "Item 2", "Item 3", "Item 4"]);
    assert_eq!(shown.len(), TIMELINE_SLOTS);
    assert_eq!(rendered.hidden_items, 2);
}

#[test]
fn timeline_falls_back_to_points_as_phases() {
    let mut slide = bare(Layout::Timeline, "Roadmap");
    slide.points = vec!["Plan".into(), "Build".into()];
    let rendered = render(&slide, 1, 1);
    let shown: Vec<String> = rendered
        .root
        .find_all_role("timeline-title")
        .iter()
        .map(|e| e.text_content())
        .collect();
    assert_eq!(shown, vec!["PHASE 1", "PHASE 2"]);
    assert_eq!(rendered.hidden_items, 0);
}

#[test]
fn gallery_shows_first_six_items_in_order() {
    let mut slide = bare(Layout::Gallery, "Shots");
    slide.items = Some(items(8));
    let rendered = render(&slide, 1, 1);
    let shown: Vec<String> = rendered
        .root
        .find_all_role("gallery-title")
        .iter()
        .map(|e| e.text_content())
        .collect();
    assert_eq!(shown.len(), GALLERY_SLOTS);
    assert_eq!(shown[0], "Item 1");
    assert_eq!(shown[5], "Item 6");
    assert_eq!(rendered.hidden_items, 2);
}

#[test]
fn gallery_without_items_has_six_placeholders() {
    let rendered = render(&bare(Layout::Gallery, "Shots"), 1, 1);
    assert_eq!(rendered.root.find_all_role("gallery-cell").len(), GALLERY_SLOTS);
}

#[test]
fn two_column_with_empty_right_column_shows_placeholder() {
    let mut slide = bare(Layout::TwoColumn, "Compare");
    slide.points = vec!["Left".into()];
    slide.right_column_points = Some(Vec::new());
    let rendered = render(&slide, 1, 1);
    let placeholder = rendered
        .root
        .find_role("right-column-placeholder")
        .expect("placeholder");
    assert_eq!(placeholder.text_content(), RIGHT_COLUMN_PLACEHOLDER);
}

#[test]
fn table_without_data_shows_no_data() {
    let rendered = render(&bare(Layout::Table, "Numbers"), 1, 1);
    let empty = rendered.root.find_role("table-empty").expect("empty marker");
    assert_eq!(empty.text_content(), EMPTY_TABLE);
    assert!(rendered.root.find_role("table-row").is_none());
}

#[test]
fn table_renders_header_and_rows() {
    let mut slide = bare(Layout::Table, "Numbers");
    slide.table_data = Some(vec![
        vec!["Name".into(), "Value".into()],
        vec!["a".into(), "1".into()],
        vec!["b".into(), "2".into()],
    ]);
    let rendered = render(&slide, 1, 1);
    assert_eq!(rendered.root.find_all_role("table-header-cell").len(), 2);
    assert_eq!(rendered.root.find_all_role("table-row").len(), 2);
    assert!(rendered.root.find_role("table-empty").is_none());
}

#[test]
fn content_bullets_follow_points() {
    let mut slide = bare(Layout::Content, "Agenda");
    slide.points = vec!["One".into(), "Two".into()];
    let rendered = render(&slide, 1, 1);
    let bullets: Vec<String> = rendered
        .root
        .find_all_role("bullet")
        .iter()
        .map(|e| e.text_content())
        .collect();
    assert_eq!(bullets.len(), 2);
    assert!(bullets[0].contains("One"));
    assert!(bullets[1].contains("Two"));
}

#[test]
fn carousel_counter_follows_index() {
    let mut slide = bare(Layout::ImageCarousel, "Photos");
    slide.items = Some(vec![
        SlideItem::new("a", "First", "one"),
        SlideItem::new("b", "Second", "two"),
        SlideItem::new("c", "Third", "three"),
    ]);

    let first = render(&slide, 1, 1);
    let counter = first.root.find_role("carousel-counter").unwrap();
    assert_eq!(counter.text_content(), "1 / 3");

    let third = render_at(&slide, 1, 1, 2);
    assert_eq!(third.root.find_role("carousel-counter").unwrap().text_content(), "3 / 3");
    assert_eq!(third.root.find_role("carousel-title").unwrap().text_content(), "Third");
    let active: Vec<_> = third
        .root
        .find_all_role("carousel-dot")
        .into_iter()
        .filter(|dot| dot.attr_value("data-active") == Some("true"))
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].attr_value("data-index"), Some("2"));

    // Stale indices wrap instead of failing.
    let wrapped = render_at(&slide, 1, 1, 4);
    assert_eq!(wrapped.root.find_role("carousel-counter").unwrap().text_content(), "2 / 3");
}

#[test]
fn bri_theme_marks_root_and_text_align_applies() {
    let mut slide = bare(Layout::Content, "Corp");
    slide.theme_mode = Some(ThemeMode::Bri);
    slide.text_align = Some(TextAlign::Center);
    let rendered = render(&slide, 1, 1);
    assert!(rendered.root.has_class("theme-bri"));
    assert!(rendered.to_html().contains("text-center"));
}

#[test]
fn big_number_uses_defaults_then_points() {
    let rendered = render(&bare(Layout::BigNumber, "Metric"), 1, 1);
    assert_eq!(rendered.root.find_role("figure").unwrap().text_content(), "98%");

    let mut slide = bare(Layout::BigNumber, "Metric");
    slide.points = vec!["42".into(), "Answers".into()];
    let rendered = render(&slide, 1, 1);
    assert_eq!(rendered.root.find_role("figure").unwrap().text_content(), "42");
    assert_eq!(rendered.root.find_role("caption").unwrap().text_content(), "Answers");
}

fn colors(rendered: &RenderedSlide) -> Vec<String> {
    rendered
        .root
        .descendants()
        .into_iter()
        .filter_map(|element| element.style_value("color").map(str::to_string))
        .collect()
}

#[test]
fn section_header_is_dark_only_without_background() {
    let plain = render(&bare(Layout::SectionHeader, "Part"), 1, 1).to_html();
    assert!(plain.contains("background-color: #18181b"));

    let mut pictured = bare(Layout::SectionHeader, "Part");
    pictured.background_image_url = Some("bg.png".into());
    let rendered = render(&pictured, 1, 1);
    assert!(!rendered.to_html().contains("background-color: #18181b"));
    assert!(rendered.root.find_role("background").is_some());
}

#[test]
fn section_header_kicker_counts_position() {
    let rendered = render(&bare(Layout::SectionHeader, "Part"), 3, 9);
    let kicker = rendered.root.find_role("kicker").expect("kicker");
    assert_eq!(kicker.text_content(), "Section 03");
}

#[test]
fn quote_wraps_title_and_rules_attribution() {
    let mut slide = bare(Layout::Quote, "Less is more");
    slide.points = vec!["Mies".into()];
    let rendered = render(&slide, 1, 1);
    assert_eq!(
        rendered.root.find_role("title").unwrap().text_content(),
        "\"Less is more\""
    );

    let row = rendered
        .root
        .descendants()
        .into_iter()
        .find(|element| {
            element.nodes().iter().any(|node| {
                matches!(node, Node::Element(child) if child.role_name() == Some("attribution"))
            })
        })
        .expect("attribution row");
    let roles: Vec<_> = row
        .nodes()
        .iter()
        .filter_map(|node| match node {
            Node::Element(child) => child.role_name(),
            _ => None,
        })
        .collect();
    assert_eq!(roles, vec!["rule", "attribution", "rule"]);
    assert_eq!(rendered.root.find_role("attribution").unwrap().text_content(), "Mies");
}

#[test]
fn image_right_mirrors_image_left() {
    let panes = |layout: Layout| {
        let mut slide = bare(layout, "Figure");
        slide.points = vec!["One".into(), "Two".into()];
        render(&slide, 1, 1)
    };

    let left = panes(Layout::ImageLeft);
    let order: Vec<_> = left
        .root
        .descendants()
        .into_iter()
        .filter_map(|e| e.role_name().filter(|r| r.ends_with("-pane")))
        .collect();
    assert_eq!(order, vec!["image-pane", "text-pane"]);
    assert!(left
        .root
        .find_all_role("paragraph")
        .iter()
        .all(|p| p.has_class("border-b")));

    let right = panes(Layout::ImageRight);
    let order: Vec<_> = right
        .root
        .descendants()
        .into_iter()
        .filter_map(|e| e.role_name().filter(|r| r.ends_with("-pane")))
        .collect();
    assert_eq!(order, vec!["text-pane", "image-pane"]);
    assert!(right.root.find_role("text-pane").unwrap().has_class("text-right"));
    let paragraphs = right.root.find_all_role("paragraph");
    assert_eq!(paragraphs.len(), 2);
    assert!(paragraphs.iter().all(|p| !p.has_class("border-b")));
}

#[test]
fn explicit_text_color_beats_bri_ink() {
    let mut slide = bare(Layout::TitleOnly, "Corp");
    slide.theme_mode = Some(ThemeMode::Bri);
    let bri = colors(&render(&slide, 1, 1));
    assert!(bri.iter().any(|c| c == "#0857C3"));

    slide.text_color = Some("#ff0000".into());
    let rendered = render(&slide, 1, 1);
    let overridden = colors(&rendered);
    assert!(overridden.len() >= 2);
    assert!(overridden.iter().all(|c| c == "#ff0000"));
    assert_eq!(rendered.surface.ink, "#ff0000");
}

#[test]
fn deeply_nested_title_markup_renders() {
    let slide = bare(Layout::Title, &"<b>x".repeat(10_000));
    let rendered = render(&slide, 1, 1);
    assert!(rendered.to_html().contains(&"x".repeat(10_000)));
    assert!(rendered.text_content().contains(&"x".repeat(100)));
}
