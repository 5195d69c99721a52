use yew::prelude::*;

use crate::animation::reveal::{Direction, FadeIn};
use crate::animation::text_reveal::{SplitMode, TextReveal};

#[function_component(TraditionalComparison)]
pub fn traditional_comparison() -> Html {
    html! {
        <section class="traditional-comparison">
            <div class="comparison-copy">
                <FadeIn direction={Direction::Right} once={false} duration={0.8} amount={0.2}>
                    <h2>
                        <TextReveal text="Where Traditional Fails, Ultrasonic Prevails" mode={SplitMode::Words} stagger={0.04} duration={0.6} />
                    </h2>
                </FadeIn>
                <FadeIn once={false} duration={0.8} delay={0.1} amount={0.15}>
                    <p>
                        {"Polishing cloths leave residue. Brushes skip tight settings. Harsh chemicals may harm \
                          stones and metals. Our ultrasonic jewelry cleaner reaches under prongs, between links, \
                          and inside every setting, lifting away dirt, oil, and build-up. Restore brilliance. \
                          Protect every cherished piece."}
                    </p>
                </FadeIn>
            </div>
            <style>
                {r#"
                    .traditional-comparison {
                        padding: 1.5rem 2.5rem;
                        background: #F7F9F6;
                    }
                    .comparison-copy {
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .comparison-copy > div {
                        max-width: 32rem;
                    }
                    .comparison-copy h2 {
                        margin: 0 0 0.5rem;
                        color: #1F3D2B;
                        font-size: 1.25rem;
                        font-weight: 600;
                    }
                    .comparison-copy p {
                        margin: 0;
                        color: rgba(31, 61, 43, 0.8);
                        font-size: 1rem;
                        line-height: 1.625;
                    }
                    @media (max-width: 640px) {
                        .traditional-comparison {
                            padding: 1rem;
                        }
                        .comparison-copy h2 {
                            font-size: 1rem;
                        }
                        .comparison-copy p {
                            font-size: 0.875rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
