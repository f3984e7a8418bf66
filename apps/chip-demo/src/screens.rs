//! The sample screens: plain tags, generic items, single and multi selection.

use chipflow_ui::{ChipColors, ChipFlow, ChipFlowSpec, Color, Density, Dp, LayoutError, Selection};
use std::collections::BTreeSet;
use std::fmt;

use crate::render::render;

const TEAL: Color = Color::from_argb(0xFF008577);

fn tags() -> Vec<&'static str> {
    vec![
        "Tag 1",
        "Tag 2",
        "Tag 33",
        "Tag 4!",
        "Long tag test",
        "Very very long tag text",
        "A+",
        "B",
        "C5",
        "D",
        "Tag one",
        "Long tag two two two",
        "Tag three",
        "Medium length tag",
        "A",
        "B+",
        "Super long tag text test",
    ]
}

fn selection_colors() -> ChipColors {
    ChipColors {
        selected_background: TEAL,
        unselected_background: Color::LIGHT_GRAY,
        selected_text: Color::WHITE,
        unselected_text: Color::DARK_GRAY,
    }
}

fn spec() -> ChipFlowSpec {
    ChipFlowSpec::new()
        .horizontal_gap(Dp(8.0))
        .vertical_gap(Dp(12.0))
}

#[derive(Clone, Debug)]
pub struct User {
    pub name: String,
    pub age: u32,
}

impl User {
    fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, age {}", self.name, self.age)
    }
}

fn students() -> Vec<User> {
    vec![
        User::new("Zhang San", 18),
        User::new("Li Si1", 19),
        User::new("Wang Wu kdkl", 20),
        User::new("Zhao Liu ddfslsld;dlskd", 18),
        User::new("Qian Qi", 21),
        User::new("Sun Ba", 19),
        User::new("Zhou Jiu", 20),
        User::new("Wu Shi ddddddd", 22),
        User::new("Zheng    Yi", 18),
        User::new("Wang Er", 19),
        User::new("Feng San", 20),
        User::new("Chen Si   ddd ", 21),
        User::new("Chu Wu  ", 18),
        User::new("Wei Liu", 19),
        User::new("Jiang Qi dsdfs", 20),
        User::new("Shen 44444 Ba", 22),
        User::new("Han 5 Jiu", 18),
        User::new("Yang Shi", 19),
        User::new("Zhu Yi, a name long enough to fill the row by itself", 20),
        User::new("Qin Er", 21),
    ]
}

/// Screen size the sample screens are laid out for.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: i32,
    pub density: Density,
}

/// Lays out, prints, clicks the chips at `clicks`, then prints again.
fn show<T, S>(
    title: &str,
    flow: &mut ChipFlow<T, S>,
    viewport: Viewport,
    clicks: &[usize],
) -> Result<(), LayoutError>
where
    S: Selection<T>,
{
    println!("== {title}");
    let layout = flow.measure(viewport.width, viewport.density)?;
    print!("{}", render(&layout, viewport.density.density));

    if clicks.is_empty() {
        return Ok(());
    }
    for &index in clicks {
        let Some(chip) = layout.chip(index) else {
            log::warn!("no chip {index} on screen '{title}'");
            continue;
        };
        let (x, y) = (
            chip.rect.x + chip.rect.width / 2,
            chip.rect.y + chip.rect.height / 2,
        );
        flow.click_at(&layout, x, y);
    }
    let layout = flow.measure(viewport.width, viewport.density)?;
    println!("-- after clicking {clicks:?}");
    print!("{}", render(&layout, viewport.density.density));
    Ok(())
}

pub fn basic_tags(viewport: Viewport) -> Result<(), LayoutError> {
    let mut flow = ChipFlow::stateless(
        tags(),
        |tag: &&str| tag.to_string(),
        |index: usize, item: &&str| {
            println!("   toast: clicked item {index}, content: {item}")
        },
    )
    .with_spec(spec());
    show("Stretched tags", &mut flow, viewport, &[0, 5])
}

pub fn generic_items(viewport: Viewport) -> Result<(), LayoutError> {
    let mut flow = ChipFlow::stateless(
        students(),
        |user: &User| user.name.clone(),
        |index: usize, item: &User| {
            println!("   toast: clicked item {index}, content: {item}")
        },
    )
    .with_spec(spec());
    show("Generic items", &mut flow, viewport, &[3])
}

pub fn single_select(viewport: Viewport) -> Result<(), LayoutError> {
    let mut items = tags();
    items[5] = "Very very long tag text 99999999999999999999999999999999999999999999999999";
    let mut flow = ChipFlow::single_select(
        items,
        |tag: &&str| tag.to_string(),
        Some(0),
        |index: usize, item: &&str| {
            println!("   toast: selected item {index}, content: {item}")
        },
    )
    .with_spec(spec().colors(selection_colors()));
    show("Single select", &mut flow, viewport, &[5, 2])
}

pub fn multi_select(viewport: Viewport) -> Result<(), LayoutError> {
    let mut flow = ChipFlow::multi_select(
        tags(),
        |tag: &&str| tag.to_string(),
        [1, 3],
        |indices: &BTreeSet<usize>, items: Vec<&&'static str>| {
            println!("   toast: selected indices {indices:?}, items {items:?}")
        },
    )
    .with_spec(spec().colors(selection_colors()));
    show("Multi select", &mut flow, viewport, &[3, 8, 12])
}
