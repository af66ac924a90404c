//! Plain-text rendering of a recipe at a given scale.

use std::fmt::Write;

use anyhow::{bail, Context, Result};
use cookscale_core::{DragConfig, Part, Recipe, RecipeView, Step};

/// A simulated drag: ingredient occurrence (1-based) and pixel offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragArg {
    pub occurrence: usize,
    pub pixels: f64,
}

pub fn parse_drag(s: &str) -> Result<DragArg, String> {
    let (occurrence, pixels) = s
        .split_once(':')
        .ok_or_else(|| format!("expected I:DX, got {:?}", s))?;
    let occurrence: usize = occurrence
        .trim()
        .parse()
        .map_err(|_| format!("invalid ingredient number {:?}", occurrence))?;
    if occurrence == 0 {
        return Err("ingredient numbers start at 1".to_string());
    }
    let pixels: f64 = pixels
        .trim()
        .parse()
        .map_err(|_| format!("invalid pixel offset {:?}", pixels))?;
    Ok(DragArg { occurrence, pixels })
}

#[derive(Debug, Clone)]
pub struct ShowOptions {
    pub scale: f64,
    /// 1-based step numbers to mark done
    pub done: Vec<usize>,
    pub drag: Option<DragArg>,
}

pub fn render(recipe: Recipe, options: &ShowOptions) -> Result<String> {
    let mut view = RecipeView::with_config(recipe, DragConfig::from_env()?);
    view.set_scale(options.scale)?;

    for &step in &options.done {
        let Some(index) = step.checked_sub(1) else {
            bail!("step numbers start at 1");
        };
        view.toggle_step(index);
    }

    if let Some(drag) = options.drag {
        let session = drag
            .occurrence
            .checked_sub(1)
            .and_then(|index| view.begin_drag(index, 0.0));
        match session {
            Some(session) => {
                view.drag_move(&session, drag.pixels);
                view.end_drag(session);
            }
            None => {
                tracing::warn!(
                    occurrence = drag.occurrence,
                    "ingredient has no scalable quantity, ignoring drag"
                );
            }
        }
    }

    render_view(&view).context("Failed to render recipe")
}

fn render_view(view: &RecipeView) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let recipe = view.recipe();

    writeln!(out, "{}", recipe.title().unwrap_or("Untitled"))?;
    if view.scale() != 1.0 {
        writeln!(out, "(scaled x{})", trim_scale(view.scale()))?;
    }

    writeln!(out)?;
    writeln!(out, "Ingredients")?;
    for (i, line) in view.ingredient_lines().iter().enumerate() {
        let amount = [line.quantity.as_str(), line.units.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        write!(out, "  {:>2}. {} {}", i + 1, checkbox(line.complete), line.name)?;
        if amount.is_empty() {
            writeln!(out)?;
        } else {
            writeln!(out, ": {}", amount)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Method")?;
    for (i, step) in recipe.steps.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {} {}",
            i + 1,
            checkbox(view.is_step_complete(i)),
            render_step(view, step)
        )?;
    }

    Ok(out)
}

fn render_step(view: &RecipeView, step: &Step) -> String {
    step.parts
        .iter()
        .map(|part| match part {
            Part::Ingredient(ingredient) => {
                let quantity = view.displayed_quantity(ingredient);
                match (quantity.is_empty(), ingredient.units.is_empty()) {
                    (true, _) => ingredient.name.clone(),
                    (false, true) => format!("{} ({})", ingredient.name, quantity),
                    (false, false) => {
                        format!("{} ({} {})", ingredient.name, quantity, ingredient.units)
                    }
                }
            }
            Part::Cookware(cookware) => cookware.name.clone(),
            Part::Timer(timer) => timer.display_text(),
            Part::Text(text) => text.value.clone(),
        })
        .collect()
}

fn checkbox(complete: bool) -> &'static str {
    if complete {
        "[x]"
    } else {
        "[ ]"
    }
}

fn trim_scale(scale: f64) -> String {
    let s = format!("{:.2}", scale);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookscale_core::parse;

    const RECIPE: &str = "\
>> title: Porridge
Simmer @oats{1/2%cup} with @milk{1%cup} in a #pot{} for ~{5%minutes}.
Top with @honey{to taste}.
";

    fn options(scale: f64) -> ShowOptions {
        ShowOptions {
            scale,
            done: vec![],
            drag: None,
        }
    }

    #[test]
    fn test_parse_drag() {
        assert_eq!(
            parse_drag("2:-35"),
            Ok(DragArg {
                occurrence: 2,
                pixels: -35.0
            })
        );
        assert!(parse_drag("0:10").is_err());
        assert!(parse_drag("2").is_err());
        assert!(parse_drag("x:1").is_err());
    }

    #[test]
    fn test_render_at_scale() {
        let out = render(parse(RECIPE).unwrap(), &options(2.0)).unwrap();
        let expected = "\
Porridge
(scaled x2)

Ingredients
   1. [ ] oats: 1 cup
   2. [ ] milk: 2 cup
   3. [ ] honey: to taste

Method
   1. [ ] Simmer oats (1 cup) with milk (2 cup) in a pot for 5 minutes.
   2. [ ] Top with honey (to taste).
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_done_and_drag() {
        let options = ShowOptions {
            scale: 1.0,
            done: vec![2],
            drag: Some(DragArg {
                occurrence: 2,
                pixels: 10.0,
            }),
        };
        let out = render(parse(RECIPE).unwrap(), &options).unwrap();
        // milk 1 -> 2 doubles everything
        assert!(out.contains("(scaled x2)"));
        assert!(out.contains("1. [ ] oats: 1 cup"));
        assert!(out.contains("3. [x] honey: to taste"));
        assert!(out.contains("2. [x] Top with honey"));
    }

    #[test]
    fn test_render_rejects_bad_input() {
        assert!(render(parse(RECIPE).unwrap(), &options(0.0)).is_err());
        let options = ShowOptions {
            scale: 1.0,
            done: vec![0],
            drag: None,
        };
        assert!(render(parse(RECIPE).unwrap(), &options).is_err());
    }

    #[test]
    fn test_trim_scale() {
        assert_eq!(trim_scale(1.5), "1.5");
        assert_eq!(trim_scale(2.0), "2");
        assert_eq!(trim_scale(0.333333), "0.33");
    }
}
