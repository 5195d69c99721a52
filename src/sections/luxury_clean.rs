use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::animation::parallax::{ParallaxDirection, ParallaxSection};
use crate::animation::reveal::{Direction, FadeIn, ScrollReveal};
use crate::config;

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

const PARAGRAPHS: [&str; 3] = [
    "Simply add water, place each piece, and press one button. Advanced vibrations reach where cloths and brushes can't, restoring every shine with confidence.",
    "Ideal for rings, necklaces, earrings, and watches. Protect your investment while enjoying professional care at home. Precision, safety, and simplicity every time.",
    "Effortlessly preserve the sparkle of your most valued jewelry. No harsh chemicals, just pure ultrasonic waves and water, safe for daily care of gold, silver, diamonds, and delicate heirlooms.",
];

#[function_component(ReviewCard)]
fn review_card() -> Html {
    let revealed = use_state_eq(|| false);
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    let show = {
        let revealed = revealed.clone();
        let hide_timer = hide_timer.clone();
        move || {
            hide_timer.borrow_mut().take();
            revealed.set(true);
        }
    };
    let onmouseenter = {
        let show = show.clone();
        Callback::from(move |_: MouseEvent| show())
    };
    let ontouchstart = Callback::from(move |_: TouchEvent| show());
    let onmouseleave = {
        let revealed = revealed.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |_: MouseEvent| {
            hide_timer.borrow_mut().take();
            revealed.set(false);
        })
    };
    // Touch has no hover-out, so the review lingers before hiding.
    let ontouchend = {
        let revealed = revealed.clone();
        Callback::from(move |_: TouchEvent| {
            let revealed = revealed.clone();
            *hide_timer.borrow_mut() = Some(Timeout::new(config::LUXURY_TOUCH_HOLD_MILLIS, move || {
                revealed.set(false);
            }));
        })
    };

    html! {
        <div
            class={classes!("review-card", (*revealed).then(|| "review-card--revealed"))}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
            ontouchstart={ontouchstart}
            ontouchend={ontouchend}
        >
            <div class="review-image">
                <img src="/assets/review.png" alt="Product Review" />
                <div class="review-shade"></div>
                <div class="review-blur"></div>
                {
                    if *revealed {
                        html! {
                            <div class="review-content">
                                <div class="review-stars">
                                    {
                                        (0..5).map(|i| html! {
                                            <svg
                                                key={i}
                                                class="review-star"
                                                viewBox="0 0 20 20"
                                                style={format!("animation-delay: {:.2}s;", i as f64 * 0.05)}
                                            >
                                                <path d={STAR_PATH} />
                                            </svg>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <p class="review-quote">{"\u{201C}Perfect for personal use! Keeps all my jewelry sparkling clean.\u{201D}"}</p>
                                <p class="review-author">{"Verified Buyer"}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[function_component(LuxuryClean)]
pub fn luxury_clean() -> Html {
    html! {
        <section class="luxury-clean">
            <div class="luxury-inner section-inner">
                <div class="luxury-copy">
                    <FadeIn direction={Direction::Left}>
                        <h2>{"Luxury Clean. Trusted Care."}</h2>
                    </FadeIn>
                    <ScrollReveal stagger={0.1} duration={0.6}>
                        { for PARAGRAPHS.iter().map(|text| html! { <p>{*text}</p> }) }
                    </ScrollReveal>
                    <FadeIn delay={0.4}>
                        <ParallaxSection speed={0.1} direction={ParallaxDirection::Down}>
                            <img class="luxury-signature" src="/assets/signature.png" alt="Signature" width="60" height="60" />
                        </ParallaxSection>
                    </FadeIn>
                </div>
                <div class="luxury-media">
                    <FadeIn direction={Direction::Right} delay={0.2} duration={0.8} class="luxury-card-wrap">
                        <ParallaxSection speed={0.15}>
                            <ReviewCard />
                        </ParallaxSection>
                    </FadeIn>
                </div>
            </div>
            <style>
                {r#"
                    .luxury-clean {
                        padding: 2.5rem;
                        background: #F7F9F6;
                    }
                    .luxury-inner {
                        display: flex;
                        align-items: center;
                        gap: 3rem;
                    }
                    .luxury-copy {
                        flex: 1;
                        max-width: 32rem;
                        color: #1F3D2B;
                    }
                    .luxury-copy h2 {
                        margin: 0 0 1rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                    }
                    .luxury-copy p {
                        margin: 0 0 1rem;
                        font-size: 1.125rem;
                        font-weight: 500;
                        line-height: 1.625;
                    }
                    .luxury-signature {
                        margin-top: 1.5rem;
                        width: 5rem;
                        height: auto;
                        opacity: 0.8;
                        filter: invert(36%) sepia(35%) saturate(748%) hue-rotate(109deg) brightness(92%) contrast(88%);
                    }
                    .luxury-media {
                        flex: 1;
                        display: flex;
                        justify-content: center;
                    }
                    .luxury-card-wrap {
                        width: 85%;
                    }
                    .review-card {
                        position: relative;
                        border-radius: 1rem;
                        overflow: hidden;
                        cursor: pointer;
                        background: linear-gradient(to bottom right, #E6EFEA, rgba(159, 211, 199, 0.3));
                        border: 1px solid rgba(159, 211, 199, 0.5);
                        box-shadow: 0 8px 32px rgba(31, 61, 43, 0.15);
                        transition: transform 0.3s ease-out, box-shadow 0.3s ease-out;
                    }
                    .review-card:hover {
                        transform: scale(1.02);
                        box-shadow: 0 16px 48px rgba(31, 61, 43, 0.20);
                    }
                    .review-image {
                        position: relative;
                        aspect-ratio: 4 / 5;
                        width: 100%;
                    }
                    .review-image img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .review-shade,
                    .review-blur {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transition: opacity 0.5s;
                    }
                    .review-shade {
                        background: linear-gradient(to top, rgba(31, 61, 43, 0.8), rgba(31, 61, 43, 0.2) 40%, transparent);
                    }
                    .review-blur {
                        backdrop-filter: blur(12px);
                        mask-image: linear-gradient(to top, black 0%, black 15%, transparent 45%);
                        -webkit-mask-image: linear-gradient(to top, black 0%, black 15%, transparent 45%);
                    }
                    .review-card--revealed .review-shade,
                    .review-card--revealed .review-blur {
                        opacity: 1;
                    }
                    .review-content {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1.25rem;
                        animation: reviewIn 0.3s ease-out;
                    }
                    .review-stars {
                        display: flex;
                        gap: 0.25rem;
                        margin-bottom: 0.5rem;
                    }
                    .review-star {
                        width: 1.25rem;
                        height: 1.25rem;
                        fill: #F5C842;
                        animation: starIn 0.2s ease-out both;
                    }
                    .review-quote {
                        margin: 0;
                        color: white;
                        font-size: 0.875rem;
                        font-weight: 500;
                        line-height: 1.375;
                    }
                    .review-author {
                        margin: 0.5rem 0 0;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 0.75rem;
                    }
                    @keyframes reviewIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes starIn {
                        from { opacity: 0; transform: scale(0); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @media (max-width: 1024px) {
                        .luxury-inner {
                            flex-direction: column;
                            gap: 2rem;
                        }
                        .luxury-copy {
                            max-width: none;
                        }
                        .luxury-card-wrap {
                            width: 100%;
                            max-width: 28rem;
                        }
                    }
                    @media (max-width: 640px) {
                        .luxury-clean {
                            padding: 2rem 1rem;
                        }
                        .luxury-copy h2 {
                            font-size: 1rem;
                        }
                        .luxury-copy p {
                            font-size: 0.875rem;
                        }
                        .luxury-signature {
                            width: 3rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
