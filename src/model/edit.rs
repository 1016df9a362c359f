//! Field-level edits. Each helper consumes nothing and returns a new slide,
//! so the caller decides whether the result becomes a history commit.

use base64::Engine;

use super::slide::{Layout, NumberFormat, NumberPosition, Slide, SlideId, SlideItem};

/// Which bullet list an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointList {
    Points,
    RightColumn,
}

/// Single numbering field change, applied over the current settings or the
/// disabled/bottom-right/numeric default.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberingField {
    Enabled(bool),
    Position(NumberPosition),
    Format(NumberFormat),
}

/// Single item field change.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemField {
    Title(String),
    Description(String),
    ImageUrl(String),
}

impl Slide {
    pub fn with_title(&self, title: impl Into<String>) -> Slide {
        Slide {
            title: title.into(),
            ..self.clone()
        }
    }

    /// An empty subtitle clears the field.
    pub fn with_subtitle(&self, subtitle: impl Into<String>) -> Slide {
        let subtitle = subtitle.into();
        Slide {
            subtitle: (!subtitle.is_empty()).then_some(subtitle),
            ..self.clone()
        }
    }

    pub fn with_layout(&self, layout: Layout) -> Slide {
        Slide {
            layout,
            ..self.clone()
        }
    }

    pub fn with_image_url(&self, url: Option<String>) -> Slide {
        Slide {
            image_url: url,
            ..self.clone()
        }
    }

    pub fn with_background(&self, url: Option<String>, overlay: Option<f32>) -> Slide {
        Slide {
            background_image_url: url,
            background_overlay_opacity: overlay,
            ..self.clone()
        }
    }

    pub fn with_text_color(&self, color: Option<String>) -> Slide {
        Slide {
            text_color: color,
            ..self.clone()
        }
    }

    pub fn with_numbering(&self, field: NumberingField) -> Slide {
        let mut numbering = self.slide_numbering.clone().unwrap_or_default();
        match field {
            NumberingField::Enabled(enabled) => numbering.enabled = enabled,
            NumberingField::Position(position) => numbering.position = position,
            NumberingField::Format(format) => numbering.format = format,
        }
        Slide {
            slide_numbering: Some(numbering),
            ..self.clone()
        }
    }

    fn point_list(&self, list: PointList) -> Vec<String> {
        match list {
            PointList::Points => self.points.clone(),
            PointList::RightColumn => self.right_column_points.clone().unwrap_or_default(),
        }
    }

    fn with_point_list(&self, list: PointList, values: Vec<String>) -> Slide {
        let mut next = self.clone();
        match list {
            PointList::Points => next.points = values,
            PointList::RightColumn => next.right_column_points = Some(values),
        }
        next
    }

    /// Append an empty entry.
    pub fn with_point_added(&self, list: PointList) -> Slide {
        let mut values = self.point_list(list);
        values.push(String::new());
        self.with_point_list(list, values)
    }

    /// Overwrite one entry. Out-of-range indexes leave the slide unchanged.
    pub fn with_point_updated(&self, list: PointList, index: usize, value: impl Into<String>) -> Slide {
        let mut values = self.point_list(list);
        match values.get_mut(index) {
            Some(slot) => *slot = value.into(),
            None => return self.clone(),
        }
        self.with_point_list(list, values)
    }

    pub fn with_point_removed(&self, list: PointList, index: usize) -> Slide {
        let mut values = self.point_list(list);
        if index >= values.len() {
            return self.clone();
        }
        values.remove(index);
        self.with_point_list(list, values)
    }

    /// Append a placeholder item with a fresh id.
    pub fn with_item_added(&self) -> Slide {
        let mut items = self.items.clone().unwrap_or_default();
        items.push(SlideItem::new(
            SlideId::generate().as_str(),
            "New Item",
            "Description...",
        ));
        Slide {
            items: Some(items),
            ..self.clone()
        }
    }

    pub fn with_item_updated(&self, index: usize, field: ItemField) -> Slide {
        let mut items = self.items.clone().unwrap_or_default();
        let Some(item) = items.get_mut(index) else {
            return self.clone();
        };
        match field {
            ItemField::Title(title) => item.title = title,
            ItemField::Description(description) => item.description = description,
            ItemField::ImageUrl(url) => {
                item.image_url = (!url.is_empty()).then_some(url);
            }
        }
        Slide {
            items: Some(items),
            ..self.clone()
        }
    }

    pub fn with_item_removed(&self, index: usize) -> Slide {
        let mut items = self.items.clone().unwrap_or_default();
        if index >= items.len() {
            return self.clone();
        }
        items.remove(index);
        Slide {
            items: Some(items),
            ..self.clone()
        }
    }

    /// Replace the table from its comma-separated text form.
    pub fn with_table_text(&self, text: &str) -> Slide {
        Slide {
            table_data: Some(parse_table_text(text)),
            ..self.clone()
        }
    }
}

/// Rows split on newlines, cells on commas, every cell trimmed.
pub fn parse_table_text(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|row| row.split(',').map(|cell| cell.trim().to_string()).collect())
        .collect()
}

/// Inverse of [`parse_table_text`] for seeding an editor field.
pub fn table_text(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join(", "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `data:` URL embedding uploaded bytes, usable as any image field.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}
