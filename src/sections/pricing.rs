use yew::prelude::*;

use crate::animation::easing;
use crate::animation::page_transition::use_page_transition;
use crate::animation::reveal::{use_in_view, FadeIn, Replay};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 3],
    pub button_text: &'static str,
    pub highlighted: bool,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Essential Clean",
        price: "$89",
        features: ["For everyday jewelry", "Manual + warranty", "Elegant packaging"],
        button_text: "Buy Now",
        highlighted: false,
    },
    Plan {
        name: "Premium Set",
        price: "$109",
        features: ["Cleaner plus accessories", "Gold-finish tongs", "Extended support"],
        button_text: "Get Started",
        highlighted: true,
    },
    Plan {
        name: "Ultimate Shine",
        price: "$129",
        features: ["Full bundle & extras", "Protective case", "Exclusive gifts"],
        button_text: "Restore Shine",
        highlighted: false,
    },
];

/// Cards lean away from the highlighted one on hover.
pub fn hover_tilt_degrees(index: usize, plan: &Plan) -> f64 {
    match (plan.highlighted, index) {
        (true, _) => 0.0,
        (false, 0) => 8.0,
        (false, _) => -8.0,
    }
}

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    index: usize,
    plan: Plan,
    visible: bool,
    on_choose: Callback<MouseEvent>,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    let entrance = format!(
        "--tilt: {}deg; transition: opacity 0.6s {ease} {delay}s, transform 0.6s {ease} {delay}s;",
        hover_tilt_degrees(props.index, plan),
        ease = easing::css::SOFT,
        delay = props.index as f64 * 0.15,
    );

    html! {
        <div
            class={classes!(
                "plan-card",
                plan.highlighted.then(|| "plan-card--highlighted"),
                props.visible.then(|| "plan-card--visible")
            )}
            style={entrance}
        >
            {
                if plan.highlighted {
                    html! { <div class="plan-glow"></div> }
                } else {
                    html! {}
                }
            }
            <p class="plan-name">{plan.name}</p>
            <p class="plan-price">{plan.price}</p>
            <ul class="plan-features">
                {
                    plan.features.iter().map(|feature| html! {
                        <li key={*feature}>
                            <svg class="plan-check" viewBox="0 0 16 16" fill="none">
                                <path d="M13.5 4.5L6 12L2.5 8.5" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                            </svg>
                            {*feature}
                        </li>
                    }).collect::<Html>()
                }
            </ul>
            <button class="plan-button" onclick={props.on_choose.clone()}>
                <span class="plan-shimmer"></span>
                <span class="plan-button-label">{plan.button_text}</span>
            </button>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let grid = use_node_ref();
    let visible = use_in_view(grid.clone(), 0.2, Replay::Never);
    let transition = use_page_transition();

    let on_choose = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        transition.navigate_to("contact", true);
    });

    html! {
        <section id="pricing" class="pricing">
            <div class="section-inner">
                <FadeIn>
                    <div class="section-heading">
                        <h2 class="serif">{"Pricing"}</h2>
                        <p>{"Professional care made simple."}</p>
                    </div>
                </FadeIn>
                <div ref={grid} class="plan-grid">
                    {
                        PLANS.iter().enumerate().map(|(index, plan)| html! {
                            <PlanCard
                                key={plan.name}
                                index={index}
                                plan={*plan}
                                visible={visible}
                                on_choose={on_choose.clone()}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .pricing {
                        padding: 3rem 2.5rem;
                        background: #E6EFEA;
                    }
                    .plan-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        perspective: 1000px;
                    }
                    .plan-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        backdrop-filter: blur(24px);
                        background: linear-gradient(to bottom right, #F7F9F6, rgba(247, 249, 246, 0.9));
                        border: 1px solid rgba(159, 211, 199, 0.4);
                        box-shadow: 0 8px 32px rgba(31, 61, 43, 0.10);
                        color: #1F3D2B;
                        transform-style: preserve-3d;
                        opacity: 0;
                        transform: translateY(50px) rotateX(-15deg);
                    }
                    .plan-card--visible {
                        opacity: 1;
                        transform: none;
                    }
                    .plan-card--visible:hover {
                        transform: translateY(-15px) rotateY(var(--tilt)) rotateX(5deg) scale(1.02);
                        box-shadow: 0 25px 60px rgba(31, 61, 43, 0.22);
                        transition: transform 0.3s ease-out, box-shadow 0.3s ease-out !important;
                    }
                    .plan-card--highlighted {
                        z-index: 10;
                        background: linear-gradient(to bottom right, #F7F9F6, white);
                        border: 2px solid rgba(46, 125, 90, 0.4);
                        box-shadow: 0 12px 48px rgba(31, 61, 43, 0.15);
                    }
                    .plan-card--highlighted.plan-card--visible {
                        transform: scale(1.05);
                    }
                    .plan-glow {
                        position: absolute;
                        inset: -2px;
                        z-index: -1;
                        border-radius: 1rem;
                        filter: blur(4px);
                        background: linear-gradient(to bottom right, rgba(159, 211, 199, 0.4), rgba(46, 125, 90, 0.2), transparent);
                        animation: glow 2.5s ease-in-out infinite;
                    }
                    .plan-name {
                        margin: 0 0 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .plan-price {
                        margin: 0 0 1.5rem;
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .plan-features {
                        flex: 1;
                        list-style: none;
                        margin: 0 0 2rem;
                        padding: 0;
                    }
                    .plan-features li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 0.75rem;
                        font-size: 0.875rem;
                    }
                    .plan-check {
                        width: 1rem;
                        height: 1rem;
                        flex-shrink: 0;
                        color: #2E7D5A;
                        transition: transform 0.4s;
                    }
                    .plan-check:hover {
                        transform: scale(1.3) rotate(360deg);
                    }
                    .plan-button {
                        position: relative;
                        overflow: hidden;
                        width: 100%;
                        padding: 0.75rem;
                        border-radius: 9999px;
                        font: inherit;
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                        background: rgba(46, 125, 90, 0.1);
                        color: #2E7D5A;
                        border: 1px solid rgba(46, 125, 90, 0.3);
                        transition: transform 0.2s, box-shadow 0.2s;
                    }
                    .plan-card--highlighted .plan-button {
                        background: #2E7D5A;
                        color: white;
                        border: none;
                    }
                    .plan-button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 8px 25px rgba(46, 125, 90, 0.25);
                    }
                    .plan-card--highlighted .plan-button:hover {
                        box-shadow: 0 15px 40px rgba(46, 125, 90, 0.5);
                    }
                    .plan-button:active {
                        transform: scale(0.95);
                    }
                    .plan-shimmer {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.25), transparent);
                        transform: translateX(-100%);
                        transition: transform 0.6s;
                    }
                    .plan-button:hover .plan-shimmer {
                        transform: translateX(200%);
                    }
                    .plan-button-label {
                        position: relative;
                    }
                    @keyframes glow {
                        0%, 100% { opacity: 0.5; transform: scale(1); }
                        50% { opacity: 0.9; transform: scale(1.01); }
                    }
                    @media (max-width: 1024px) {
                        .plan-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .pricing {
                            padding: 2rem 1rem;
                        }
                        .plan-grid {
                            grid-template-columns: 1fr;
                        }
                        .plan-card--highlighted {
                            order: -1;
                        }
                        .plan-card--highlighted.plan-card--visible {
                            transform: none;
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
    fn exactly_one_plan_is_highlighted() {
        let highlighted: Vec<_> = PLANS.iter().filter(|p| p.highlighted).map(|p| p.name).collect();
        assert_eq!(highlighted, ["Premium Set"]);
    }

    #[test]
    fn side_cards_tilt_away_from_the_middle() {
        assert_eq!(hover_tilt_degrees(0, &PLANS[0]), 8.0);
        assert_eq!(hover_tilt_degrees(1, &PLANS[1]), 0.0);
        assert_eq!(hover_tilt_degrees(2, &PLANS[2]), -8.0);
    }
}
