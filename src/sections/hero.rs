use yew::prelude::*;

use crate::animation::easing;
use crate::animation::text_reveal::{SplitMode, TextReveal};
use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    let image_style = format!(
        "animation: heroImageIn 1s {} {}s both;",
        easing::css::POWER3_OUT,
        config::HERO_IMAGE_DELAY_SECS,
    );

    html! {
        <section class="hero">
            <h1 class="hero-title serif">
                <TextReveal
                    text="Spotless."
                    mode={SplitMode::Chars}
                    delay={config::HERO_REVEAL_DELAY_SECS}
                    stagger={0.1}
                    duration={1.0}
                />
            </h1>
            <div class="hero-image-wrap">
                <div class="hero-image" style={image_style}>
                    <img src="/assets/hero.png" alt="Ultrasonic Jewelry Cleaner" width="1280" height="720" />
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        padding: 2rem 2.5rem 1.5rem;
                        background: #F7F9F6;
                    }
                    .hero-title {
                        margin: 0 0 3rem;
                        text-align: center;
                        font-size: clamp(2.25rem, 10vw, 8rem);
                        color: #1F3D2B;
                    }
                    .hero-image-wrap {
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .hero-image {
                        background: #E6EFEA;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 8px 32px rgba(31, 61, 43, 0.10);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .hero-image:hover {
                        transform: scale(1.01);
                        box-shadow: 0 16px 48px rgba(31, 61, 43, 0.15);
                    }
                    .hero-image img {
                        display: block;
                        width: 100%;
                        height: auto;
                        object-fit: cover;
                    }
                    @keyframes heroImageIn {
                        from { opacity: 0; transform: translateY(30px) scale(0.95); }
                        to { opacity: 1; transform: translateY(0) scale(1); }
                    }
                    @media (max-width: 640px) {
                        .hero {
                            padding: 1.5rem 1rem 1rem;
                        }
                        .hero-title {
                            margin-bottom: 1.5rem;
                        }
                        .hero-image {
                            border-radius: 1rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
