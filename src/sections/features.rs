use yew::prelude::*;

use crate::animation::reveal::{fade_style, use_in_view, Direction, Replay};

const STAGGER_SECS: f64 = 0.08;
const FIRST_DELAY_SECS: f64 = 0.1;

pub struct Feature {
    pub label: &'static str,
    icon: fn() -> Html,
}

fn icon(paths: Html) -> Html {
    html! {
        <svg class="feature-icon" viewBox="0 0 48 48" fill="none" stroke="currentColor" stroke-width="2">
            { paths }
        </svg>
    }
}

fn icon_ultrasonic_precision() -> Html {
    icon(html! {
        <>
            <path d="M24 8L28 16L24 24L20 16L24 8Z" />
            <path d="M24 24L28 32L24 40L20 32L24 24Z" />
            <path d="M16 12L20 16L16 20L12 16L16 12Z" />
            <path d="M32 12L36 16L32 20L28 16L32 12Z" />
        </>
    })
}

fn icon_cleans_multiple_pieces() -> Html {
    icon(html! {
        <>
            <circle cx="16" cy="24" r="8" />
            <circle cx="32" cy="24" r="8" />
        </>
    })
}

fn icon_minutes_to_shine() -> Html {
    icon(html! {
        <>
            <circle cx="24" cy="24" r="12" />
            <path d="M24 16V24L30 28" stroke-linecap="round" />
        </>
    })
}

fn icon_water_only_safe() -> Html {
    icon(html! {
        <>
            <path d="M24 8C24 8 32 16 32 24C32 32 24 40 24 40C24 40 16 32 16 24C16 16 24 8 24 8Z" />
            <circle cx="24" cy="24" r="4" />
        </>
    })
}

fn icon_gentle_on_gems() -> Html {
    icon(html! {
        <>
            <path d="M12 20L24 12L36 20" />
            <path d="M12 28L24 36L36 28" />
            <path d="M16 24L24 20L32 24" />
        </>
    })
}

fn icon_even_deep_clean() -> Html {
    icon(html! {
        <>
            <ellipse cx="24" cy="24" rx="16" ry="10" />
            <ellipse cx="24" cy="24" rx="8" ry="5" />
        </>
    })
}

fn icon_restores_brilliance() -> Html {
    icon(html! {
        <>
            <circle cx="24" cy="24" r="14" />
            <circle cx="24" cy="24" r="6" />
            <path d="M24 10V14M24 34V38M10 24H14M34 24H38" />
        </>
    })
}

fn icon_one_touch_safe() -> Html {
    icon(html! {
        <>
            <path d="M20 16V32M24 12V36M28 16V32" stroke-linecap="round" />
            <path d="M16 20V28M32 20V28" stroke-linecap="round" />
        </>
    })
}

pub const FEATURES: &[Feature] = &[
    Feature { label: "Ultrasonic Precision", icon: icon_ultrasonic_precision },
    Feature { label: "Cleans Multiple Pieces", icon: icon_cleans_multiple_pieces },
    Feature { label: "Minutes to Shine", icon: icon_minutes_to_shine },
    Feature { label: "Water-Only Safe", icon: icon_water_only_safe },
    Feature { label: "Gentle on Gems", icon: icon_gentle_on_gems },
    Feature { label: "Even Deep Clean", icon: icon_even_deep_clean },
    Feature { label: "Restores Brilliance", icon: icon_restores_brilliance },
    Feature { label: "One-Touch Safe", icon: icon_one_touch_safe },
];

pub fn feature_delay(index: usize) -> f64 {
    FIRST_DELAY_SECS + index as f64 * STAGGER_SECS
}

#[function_component(Features)]
pub fn features() -> Html {
    let grid = use_node_ref();
    let visible = use_in_view(grid.clone(), 0.1, Replay::Never);

    html! {
        <section class="features">
            <div ref={grid} class="features-grid section-inner">
                {
                    FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <div
                            key={feature.label}
                            class="feature"
                            style={fade_style(Direction::Up, visible, 0.5, feature_delay(i))}
                        >
                            <div class="feature-icon-wrap">{ (feature.icon)() }</div>
                            <p>{feature.label}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                    .features {
                        padding: 3rem 2.5rem;
                        background: #E6EFEA;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 3rem;
                    }
                    .feature {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .feature-icon-wrap {
                        color: #9FD3C7;
                        margin-bottom: 1rem;
                        transition: transform 0.2s, color 0.2s;
                    }
                    .feature-icon-wrap:hover {
                        transform: scale(1.1);
                        color: #2E7D5A;
                    }
                    .feature-icon {
                        width: 3rem;
                        height: 3rem;
                    }
                    .feature p {
                        margin: 0;
                        color: #1F3D2B;
                        font-size: 0.875rem;
                        font-weight: 500;
                        line-height: 1.25;
                    }
                    @media (max-width: 768px) {
                        .features-grid {
                            grid-template-columns: repeat(3, 1fr);
                            gap: 2rem;
                        }
                    }
                    @media (max-width: 640px) {
                        .features {
                            padding: 2rem 1rem;
                        }
                        .features-grid {
                            grid-template-columns: repeat(2, 1fr);
                            gap: 1.5rem;
                        }
                        .feature-icon {
                            width: 2.5rem;
                            height: 2.5rem;
                        }
                        .feature p {
                            font-size: 0.75rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_eight_distinct_features() {
        assert_eq!(FEATURES.len(), 8);
        let mut labels: Vec<_> = FEATURES.iter().map(|f| f.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn tiles_are_staggered() {
        assert_eq!(feature_delay(0), FIRST_DELAY_SECS);
        assert!((feature_delay(7) - (0.1 + 7.0 * 0.08)).abs() < 1e-9);
    }
}
