use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use slidegen::config::Config;
use slidegen::export::{CancelHandle, ExportOptions, ExportPipeline, FlatRasterizer};
use slidegen::logging::{init_tracing, init_tracing_for_tui};
use slidegen::markup::plain_text;
use slidegen::model::{
    starter_deck, FontFamily, FontSize, ItemField, Layout, NumberFormat, NumberPosition,
    PointList, Slide, SlideNumbering, SlidePatch, TablePadding, TextAlign, ThemeMode,
    TitleAnimation,
};
use slidegen::render;
use slidegen::store::DeckStore;
use slidegen::ui::editor::{EditorIntent, EditorSession};

/// Build, preview, present and export slide decks
#[derive(Parser, Debug)]
#[command(name = "slidegen", version)]
struct Cli {
    /// Config file (default: <config dir>/slidegen/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Directory holding the saved deck (overrides storage.dir)
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List slides; the selected one is marked with '>'
    List,
    /// Print a slide (or the whole deck) as HTML
    Render {
        /// 1-based slide number; whole deck when omitted
        #[arg(long)]
        slide: Option<usize>,
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Export the deck to PDF
    Export {
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Present full-screen in the terminal
    Present {
        /// 1-based slide to start from (default: the selected slide)
        #[arg(long)]
        from: Option<usize>,
    },
    /// Append a blank content slide
    Add,
    /// Duplicate a slide (default: the selected slide)
    Duplicate { slide: Option<usize> },
    /// Delete a slide (default: the selected slide)
    Delete { slide: Option<usize> },
    /// Select a slide
    Select { slide: usize },
    /// Change one field of a slide
    Edit(EditArgs),
    /// Apply style settings to every slide
    ApplyAll(ApplyAllArgs),
    /// Revert the last change to the deck
    Undo,
    /// Re-apply the last undone change
    Redo,
    /// Replace the deck with the starter deck
    Reset,
}

#[derive(Args, Debug)]
struct EditArgs {
    /// 1-based slide to edit (default: the selected slide); it becomes
    /// the selected slide
    #[arg(long)]
    slide: Option<usize>,

    #[command(subcommand)]
    field: EditCommand,
}

#[derive(Subcommand, Debug)]
enum EditCommand {
    /// Set the title (inline <b>, <i>, <u> allowed)
    Title { text: String },
    /// Set the subtitle; an empty string clears it
    Subtitle { text: String },
    /// Switch layout (title, section_header, content, table, ...)
    Layout { layout: String },
    /// Append a bullet point
    AddPoint {
        text: String,
        /// Target the right column of a two-column slide
        #[arg(long)]
        right: bool,
    },
    /// Replace a bullet point
    SetPoint {
        /// 1-based point number
        number: usize,
        text: String,
        #[arg(long)]
        right: bool,
    },
    /// Remove a bullet point
    RemovePoint {
        number: usize,
        #[arg(long)]
        right: bool,
    },
    /// Append an item (timeline, gallery, carousel)
    AddItem(ItemArgs),
    /// Change fields of an item
    SetItem {
        /// 1-based item number
        number: usize,
        #[command(flatten)]
        fields: ItemArgs,
    },
    /// Remove an item
    RemoveItem { number: usize },
    /// Replace the table; one --row per row, cells separated by commas
    Table {
        #[arg(long = "row", required = true)]
        rows: Vec<String>,
    },
    /// Set or clear (no argument) the side image URL
    Image { url: Option<String> },
    /// Set or clear (no argument) the background image
    Background {
        url: Option<String>,
        /// Overlay opacity, 0.0 to 0.9
        #[arg(long)]
        overlay: Option<f32>,
    },
    /// Set or clear (no argument) the text colour
    TextColor { color: Option<String> },
}

#[derive(Args, Debug)]
struct ItemArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Image URL; an empty string clears it
    #[arg(long)]
    image: Option<String>,
}

impl ItemArgs {
    fn into_fields(self) -> Vec<ItemField> {
        let mut fields = Vec::new();
        if let Some(title) = self.title {
            fields.push(ItemField::Title(title));
        }
        if let Some(description) = self.description {
            fields.push(ItemField::Description(description));
        }
        if let Some(url) = self.image {
            fields.push(ItemField::ImageUrl(url));
        }
        fields
    }
}

fn point_list(right: bool) -> PointList {
    if right {
        PointList::RightColumn
    } else {
        PointList::Points
    }
}

fn point_count(slide: &Slide, list: PointList) -> usize {
    match list {
        PointList::Points => slide.points.len(),
        PointList::RightColumn => slide.right_column_points.as_ref().map_or(0, Vec::len),
    }
}

/// 1-based entry number to an index into a list of `len` entries.
fn entry_index(number: usize, len: usize, what: &str) -> Result<usize> {
    let index = to_index(number)?;
    if index >= len {
        bail!("{} {} does not exist (slide has {})", what, number, len);
    }
    Ok(index)
}

impl EditCommand {
    fn apply(self, slide: &Slide) -> Result<Slide> {
        let edited = match self {
            EditCommand::Title { text } => slide.with_title(text),
            EditCommand::Subtitle { text } => slide.with_subtitle(text),
            EditCommand::Layout { layout } => {
                let layout = Layout::from_token(&layout);
                if !layout.is_known() {
                    let known: Vec<_> = Layout::known().iter().map(|l| l.to_string()).collect();
                    bail!("Unknown layout '{}'; expected one of: {}", layout, known.join(", "));
                }
                slide.with_layout(layout)
            }
            EditCommand::AddPoint { text, right } => {
                let list = point_list(right);
                let index = point_count(slide, list);
                slide.with_point_added(list).with_point_updated(list, index, text)
            }
            EditCommand::SetPoint { number, text, right } => {
                let list = point_list(right);
                let index = entry_index(number, point_count(slide, list), "Point")?;
                slide.with_point_updated(list, index, text)
            }
            EditCommand::RemovePoint { number, right } => {
                let list = point_list(right);
                let index = entry_index(number, point_count(slide, list), "Point")?;
                slide.with_point_removed(list, index)
            }
            EditCommand::AddItem(fields) => {
                let index = slide.items.as_ref().map_or(0, Vec::len);
                fields
                    .into_fields()
                    .into_iter()
                    .fold(slide.with_item_added(), |next, field| {
                        next.with_item_updated(index, field)
                    })
            }
            EditCommand::SetItem { number, fields } => {
                let len = slide.items.as_ref().map_or(0, Vec::len);
                let index = entry_index(number, len, "Item")?;
                let fields = fields.into_fields();
                if fields.is_empty() {
                    bail!("Nothing to change; pass --title, --description or --image");
                }
                fields
                    .into_iter()
                    .fold(slide.clone(), |next, field| next.with_item_updated(index, field))
            }
            EditCommand::RemoveItem { number } => {
                let len = slide.items.as_ref().map_or(0, Vec::len);
                slide.with_item_removed(entry_index(number, len, "Item")?)
            }
            EditCommand::Table { rows } => slide.with_table_text(&rows.join("\n")),
            EditCommand::Image { url } => slide.with_image_url(url),
            EditCommand::Background { url, overlay } => slide.with_background(url, overlay),
            EditCommand::TextColor { color } => slide.with_text_color(color),
        };
        Ok(edited)
    }
}

#[derive(Args, Debug)]
struct ApplyAllArgs {
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
    /// auto, inter, grotesk, serif or mono
    #[arg(long)]
    font_family: Option<String>,
    /// Body size token (xs … 8xl)
    #[arg(long)]
    font_size: Option<String>,
    /// Title size token (xs … 8xl)
    #[arg(long)]
    title_size: Option<String>,
    #[arg(long, value_enum)]
    align: Option<AlignArg>,
    /// CSS colour for all text
    #[arg(long)]
    text_color: Option<String>,
    /// none, fade, slide-top or zoom
    #[arg(long)]
    animation: Option<String>,
    /// compact, normal or spacious
    #[arg(long)]
    table_padding: Option<String>,
    /// Show slide numbers
    #[arg(long, value_enum)]
    numbering: Option<Toggle>,
    /// top-left, top-right, bottom-left or bottom-right
    #[arg(long, requires = "numbering")]
    number_position: Option<String>,
    /// numeric or page-of
    #[arg(long, requires = "numbering")]
    number_format: Option<String>,
    /// Background image URL
    #[arg(long)]
    background: Option<String>,
    /// Background overlay opacity, 0.0 to 0.9
    #[arg(long)]
    overlay: Option<f32>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Light,
    Bri,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlignArg {
    Left,
    Center,
    Right,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Toggle {
    On,
    Off,
}

impl ApplyAllArgs {
    fn into_patch(self) -> SlidePatch {
        let slide_numbering = self.numbering.map(|toggle| {
            let defaults = SlideNumbering::default();
            SlideNumbering {
                enabled: toggle == Toggle::On,
                position: self
                    .number_position
                    .as_deref()
                    .map(NumberPosition::from_token)
                    .unwrap_or(defaults.position),
                format: self
                    .number_format
                    .as_deref()
                    .map(NumberFormat::from_token)
                    .unwrap_or(defaults.format),
            }
        });

        SlidePatch {
            font_family: self.font_family.as_deref().map(FontFamily::from_token),
            font_size: self.font_size.as_deref().map(FontSize::from_token),
            title_font_size: self.title_size.as_deref().map(FontSize::from_token),
            slide_numbering,
            theme_mode: self.theme.map(|theme| match theme {
                ThemeArg::Light => ThemeMode::Light,
                ThemeArg::Bri => ThemeMode::Bri,
            }),
            text_align: self.align.map(|align| match align {
                AlignArg::Left => TextAlign::Left,
                AlignArg::Center => TextAlign::Center,
                AlignArg::Right => TextAlign::Right,
            }),
            text_color: self.text_color,
            title_animation: self.animation.as_deref().map(TitleAnimation::from_token),
            table_padding: self.table_padding.as_deref().map(TablePadding::from_token),
            background_image_url: self.background,
            background_overlay_opacity: self.overlay,
        }
    }
}

/// 1-based slide number from the command line to a deck index.
fn to_index(slide: usize) -> Result<usize> {
    if slide == 0 {
        bail!("Slide numbers start at 1");
    }
    Ok(slide - 1)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if matches!(cli.command, Command::Present { .. }) {
        init_tracing_for_tui(&config.logging);
    } else {
        init_tracing(&config.logging);
    }

    let dir = cli.data_dir.clone().unwrap_or_else(|| config.storage_dir());
    let store = DeckStore::open(&dir).context("Failed to open deck store")?;
    let mut session = EditorSession::open(store);

    match cli.command {
        Command::List => {
            for (i, slide) in session.deck().iter().enumerate() {
                let marker = if i == session.current() { '>' } else { ' ' };
                println!(
                    "{} {:02}  {:<15} {}",
                    marker,
                    i + 1,
                    slide.layout.as_str(),
                    plain_text(&slide.title)
                );
            }
        }

        Command::Render { slide, out } => {
            let html = match slide {
                Some(number) => {
                    let index = to_index(number)?;
                    let deck = session.deck();
                    let Some(slide) = deck.get(index) else {
                        bail!("Slide {} does not exist (deck has {})", number, deck.len());
                    };
                    render::render(slide, index + 1, deck.len()).to_html()
                }
                None => render::deck_html(session.deck()),
            };
            match out {
                Some(path) => std::fs::write(&path, html)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{}", html),
            }
        }

        Command::Export { out } => {
            let out = out.unwrap_or_else(|| PathBuf::from(&config.export.file_name));
            let pipeline =
                ExportPipeline::new(FlatRasterizer, ExportOptions::from(&config.export));
            let cancel = CancelHandle::new();
            let on_ctrl_c = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_ctrl_c.cancel();
                }
            });
            let report = pipeline.run(session.deck(), &out, &cancel).await?;
            println!("Exported {} pages to {}", report.pages, report.path.display());
        }

        Command::Present { from } => {
            let from = match from {
                Some(number) => to_index(number)?,
                None => session.current(),
            };
            let deck = session.deck().clone();
            let last = tokio::task::spawn_blocking(move || slidegen::ui::present(deck, from))
                .await?
                .context("Presentation failed")?;
            session.dispatch(EditorIntent::Select(last))?;
        }

        Command::Add => {
            session.dispatch(EditorIntent::AddSlide)?;
            println!("Added slide {:02}", session.current() + 1);
        }

        Command::Duplicate { slide } => {
            let index = match slide {
                Some(number) => to_index(number)?,
                None => session.current(),
            };
            let before = session.deck().len();
            session.dispatch(EditorIntent::DuplicateSlide(index))?;
            if session.deck().len() == before {
                bail!("Slide {} does not exist", index + 1);
            }
            println!("Duplicated slide {:02} as {:02}", index + 1, session.current() + 1);
        }

        Command::Delete { slide } => {
            let index = match slide {
                Some(number) => to_index(number)?,
                None => session.current(),
            };
            let before = session.deck().len();
            if index >= before {
                bail!("Slide {} does not exist (deck has {})", index + 1, before);
            }
            session.dispatch(EditorIntent::DeleteSlide(index))?;
            if session.deck().len() == before {
                bail!("Cannot delete slide {}: a deck keeps at least one slide", index + 1);
            }
            println!("Deleted slide {:02}; {} left", index + 1, session.deck().len());
        }

        Command::Select { slide } => {
            session.dispatch(EditorIntent::Select(to_index(slide)?))?;
            println!("Selected slide {:02}", session.current() + 1);
        }

        Command::Edit(args) => {
            if let Some(number) = args.slide {
                let index = to_index(number)?;
                if index >= session.deck().len() {
                    bail!("Slide {} does not exist (deck has {})", number, session.deck().len());
                }
                session.dispatch(EditorIntent::Select(index))?;
            }
            let edited = args.field.apply(session.state().current_slide())?;
            let before = session.deck().clone();
            session.dispatch(EditorIntent::UpdateSlide(edited))?;
            if session.deck() == &before {
                println!("Slide {:02} unchanged", session.current() + 1);
            } else {
                println!("Updated slide {:02}", session.current() + 1);
            }
        }

        Command::Undo => {
            if !session.state().can_undo() {
                bail!("Nothing to undo");
            }
            session.dispatch(EditorIntent::Undo)?;
            println!(
                "Undone; {} slides, slide {:02} selected",
                session.deck().len(),
                session.current() + 1
            );
        }

        Command::Redo => {
            if !session.state().can_redo() {
                bail!("Nothing to redo");
            }
            session.dispatch(EditorIntent::Redo)?;
            println!(
                "Redone; {} slides, slide {:02} selected",
                session.deck().len(),
                session.current() + 1
            );
        }

        Command::ApplyAll(args) => {
            let patch = args.into_patch();
            if patch.is_empty() {
                bail!("Nothing to apply; pass at least one setting");
            }
            session.dispatch(EditorIntent::ApplyToAll(patch))?;
            println!("Updated {} slides", session.deck().len());
        }

        Command::Reset => {
            session.dispatch(EditorIntent::ReplaceDeck(starter_deck()))?;
            println!("Deck reset to {} starter slides", session.deck().len());
        }
    }

    Ok(())
}
