use crate::model::{Deck, Layout, Slide};
use crate::render::{self, RenderedSlide};
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use crate::ui::mvi::dispatch;
use crate::ui::present::{PresentIntent, PresentReducer, PresentState};

/// Presenter state: a read-only deck plus the two navigation machines.
pub struct App {
    deck: Deck,
    present: PresentState,
    carousel: CarouselState,
    /// Last slide shown, reported back when presenting ends.
    last_index: usize,
}

impl App {
    pub fn new(deck: Deck, from: usize) -> Self {
        let mut present = PresentState::Idle;
        dispatch::<PresentReducer>(
            &mut present,
            PresentIntent::Start {
                from,
                total: deck.len(),
            },
        );
        let last_index = present.index().unwrap_or(0);
        Self {
            deck,
            present,
            carousel: CarouselState::default(),
            last_index,
        }
    }

    pub fn should_quit(&self) -> bool {
        !self.present.is_presenting()
    }

    /// Index of the slide on screen, or the last one shown after exit.
    pub fn index(&self) -> usize {
        self.present.index().unwrap_or(self.last_index)
    }

    pub fn total(&self) -> usize {
        self.deck.len()
    }

    pub fn slide(&self) -> Option<&Slide> {
        self.deck.get(self.index())
    }

    pub fn carousel_position(&self) -> Option<(usize, usize)> {
        let slide = self.slide().filter(|s| s.layout == Layout::ImageCarousel)?;
        let len = render::carousel_len(slide);
        Some((self.carousel.index_of(&slide.id) % len.max(1), len))
    }

    pub fn rendered(&self) -> Option<RenderedSlide> {
        let slide = self.slide()?;
        Some(render::render_at(
            slide,
            self.index() + 1,
            self.total(),
            self.carousel.index_of(&slide.id),
        ))
    }

    pub fn on_present(&mut self, intent: PresentIntent) {
        dispatch::<PresentReducer>(&mut self.present, intent);
        if let Some(index) = self.present.index() {
            if index != self.last_index {
                tracing::debug!(index, total = self.total(), "Presenting slide");
            }
            self.last_index = index;
        }
    }

    /// Step the carousel on screen, if there is one.
    pub fn on_carousel_step(&mut self, forward: bool) {
        let Some(slide) = self.slide().filter(|s| s.layout == Layout::ImageCarousel) else {
            return;
        };
        let slide_id = slide.id.clone();
        let len = render::carousel_len(slide);
        let intent = if forward {
            CarouselIntent::Next { slide: slide_id, len }
        } else {
            CarouselIntent::Prev { slide: slide_id, len }
        };
        dispatch::<CarouselReducer>(&mut self.carousel, intent);
    }

    /// Jump the carousel on screen to entry `index`. Out-of-range entries
    /// are ignored.
    pub fn on_carousel_select(&mut self, index: usize) {
        let Some(slide) = self.slide().filter(|s| s.layout == Layout::ImageCarousel) else {
            return;
        };
        let intent = CarouselIntent::Select {
            slide: slide.id.clone(),
            len: render::carousel_len(slide),
            index,
        };
        dispatch::<CarouselReducer>(&mut self.carousel, intent);
    }

    pub fn request_quit(&mut self) {
        self.on_present(PresentIntent::Exit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::starter_deck;

    #[test]
    fn exit_remembers_last_slide() {
        let mut app = App::new(starter_deck(), 1);
        app.on_present(PresentIntent::Next);
        app.request_quit();
        assert!(app.should_quit());
        assert_eq!(app.index(), 2);
    }

    fn carousel_deck() -> Deck {
        let slides = vec![
            Slide::new(crate::model::SlideId::new("c"), Layout::ImageCarousel, "Shots"),
            Slide::new(crate::model::SlideId::new("d"), Layout::Content, "After"),
        ];
        Deck::new(slides).unwrap()
    }

    #[test]
    fn carousel_select_jumps_to_entry() {
        let mut app = App::new(carousel_deck(), 0);
        let (_, len) = app.carousel_position().unwrap();
        app.on_carousel_select(len - 1);
        assert_eq!(app.carousel_position(), Some((len - 1, len)));
        app.on_carousel_select(len + 5);
        assert_eq!(app.carousel_position(), Some((len - 1, len)));
    }

    #[test]
    fn carousel_step_ignored_on_other_layouts() {
        let mut app = App::new(starter_deck(), 0);
        app.on_carousel_step(true);
        assert!(app.carousel_position().is_none());
    }
}
