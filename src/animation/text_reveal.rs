use yew::prelude::*;

use crate::animation::easing;
use crate::animation::reveal::{use_in_view, Replay};

const NBSP: char = '\u{00A0}';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SplitMode {
    #[default]
    Chars,
    Words,
}

/// Breaks text into the pieces that animate independently. Spaces become
/// non-breaking so inline-block spans keep their width.
pub fn split_units(text: &str, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Chars => text
            .chars()
            .map(|c| if c == ' ' { NBSP.to_string() } else { c.to_string() })
            .collect(),
        SplitMode::Words => {
            let words: Vec<&str> = text.split(' ').collect();
            let last = words.len().saturating_sub(1);
            words
                .iter()
                .enumerate()
                .map(|(i, word)| if i < last { format!("{}{}", word, NBSP) } else { word.to_string() })
                .collect()
        }
    }
}

pub fn unit_delay(index: usize, delay: f64, stagger: f64) -> f64 {
    delay + index as f64 * stagger
}

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub mode: SplitMode,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.05)]
    pub stagger: f64,
    #[prop_or(0.8)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), 0.5, Replay::Never);

    let units = split_units(&props.text, props.mode).into_iter().enumerate().map(|(i, unit)| {
        let style = format!(
            "transition: opacity {d}s {ease} {delay:.2}s, transform {d}s {ease} {delay:.2}s;",
            d = props.duration,
            ease = easing::css::POWER4_IN_OUT,
            delay = unit_delay(i, props.delay, props.stagger),
        );
        html! { <span class="text-reveal-unit" style={style}>{unit}</span> }
    });

    html! {
        <span
            ref={node}
            class={classes!("text-reveal", visible.then(|| "text-reveal--visible"), props.class.clone())}
            aria-label={props.text.clone()}
        >
            { for units }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_keep_every_character() {
        let units = split_units("Spotless.", SplitMode::Chars);
        assert_eq!(units.len(), 9);
        assert_eq!(units.concat(), "Spotless.");
    }

    #[test]
    fn chars_turn_spaces_non_breaking() {
        let units = split_units("a b", SplitMode::Chars);
        assert_eq!(units, vec!["a".to_string(), "\u{00A0}".to_string(), "b".to_string()]);
    }

    #[test]
    fn words_carry_trailing_space_except_last() {
        let units = split_units("Professional care made simple.", SplitMode::Words);
        assert_eq!(units.len(), 4);
        assert_eq!(units[0], "Professional\u{00A0}");
        assert_eq!(units[3], "simple.");
    }

    #[test]
    fn empty_text_has_no_words_to_pad() {
        assert_eq!(split_units("", SplitMode::Words), vec![String::new()]);
        assert!(split_units("", SplitMode::Chars).is_empty());
    }

    #[test]
    fn delays_are_staggered() {
        assert!((unit_delay(0, 2.8, 0.1) - 2.8).abs() < 1e-12);
        assert!((unit_delay(5, 2.8, 0.1) - 3.3).abs() < 1e-12);
    }
}
