use yew::prelude::*;

use crate::animation::reveal::FadeIn;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 8] = [
    Testimonial {
        quote: "My rings look flawlessly new, no residue, just pure shine. Simple and safe.",
        name: "Jamie",
        title: "Jewelry Enthusiast",
    },
    Testimonial {
        quote: "Finally a cleaner that's gentle and effortless. Every necklace sparkles.",
        name: "Chris",
        title: "Watch Collector",
    },
    Testimonial {
        quote: "It's like professional care at home. My earrings have never looked brighter.",
        name: "Sam",
        title: "Gem Lover",
    },
    Testimonial {
        quote: "I was skeptical at first, but the results are incredible. My diamond ring looks brand new!",
        name: "Maria",
        title: "Fashion Blogger",
    },
    Testimonial {
        quote: "Best investment for my jewelry collection. Clean, safe, and effortless every time.",
        name: "Alex",
        title: "Collector",
    },
    Testimonial {
        quote: "My grandmother's vintage pieces have never looked better. Truly gentle on delicate items.",
        name: "Emma",
        title: "Antique Enthusiast",
    },
    Testimonial {
        quote: "Professional results without the professional price. My watches are spotless.",
        name: "David",
        title: "Watch Aficionado",
    },
    Testimonial {
        quote: "The before and after difference is stunning. Worth every penny!",
        name: "Sophie",
        title: "Jewelry Designer",
    },
];

/// The list twice over, so the track can scroll by half its width and loop
/// without a visible seam.
pub fn marquee_track() -> impl Iterator<Item = &'static Testimonial> {
    TESTIMONIALS.iter().chain(TESTIMONIALS.iter())
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;
    html! {
        <div class="testimonial-card">
            <p class="testimonial-quote">{format!("\u{201C}{}\u{201D}", t.quote)}</p>
            <div>
                <p class="testimonial-name">{t.name}</p>
                <p class="testimonial-title">{t.title}</p>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="about" class="testimonials">
            <div class="section-inner testimonials-heading">
                <FadeIn>
                    <div class="section-heading">
                        <h2 class="serif">{"Refined Results"}</h2>
                        <p>{"What Our Customers Say"}</p>
                    </div>
                </FadeIn>
            </div>
            <div class="marquee">
                <div class="marquee-fade marquee-fade--left"></div>
                <div class="marquee-fade marquee-fade--right"></div>
                <div class="marquee-track">
                    {
                        marquee_track().enumerate().map(|(i, testimonial)| html! {
                            <TestimonialCard key={i} testimonial={*testimonial} />
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .testimonials {
                        padding: 3rem 0;
                        overflow: hidden;
                        background: #F7F9F6;
                    }
                    .testimonials-heading {
                        padding: 0 2.5rem;
                    }
                    .marquee {
                        position: relative;
                    }
                    .marquee-fade {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 12rem;
                        z-index: 10;
                        pointer-events: none;
                    }
                    .marquee-fade--left {
                        left: 0;
                        background: linear-gradient(to right, #F7F9F6, rgba(247, 249, 246, 0.8), transparent);
                    }
                    .marquee-fade--right {
                        right: 0;
                        background: linear-gradient(to left, #F7F9F6, rgba(247, 249, 246, 0.8), transparent);
                    }
                    .marquee-track {
                        display: flex;
                        width: max-content;
                        animation: marquee 40s linear infinite;
                    }
                    .marquee-track:hover {
                        animation-play-state: paused;
                    }
                    .testimonial-card {
                        flex-shrink: 0;
                        width: 20rem;
                        margin: 0 0.75rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(230, 239, 234, 0.6);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(159, 211, 199, 0.3);
                        box-shadow: 0 4px 24px rgba(31, 61, 43, 0.08);
                        color: #1F3D2B;
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .testimonial-card:hover {
                        transform: scale(1.02);
                        box-shadow: 0 12px 40px rgba(31, 61, 43, 0.15);
                    }
                    .testimonial-quote {
                        margin: 0 0 1rem;
                        font-size: 0.875rem;
                        line-height: 1.625;
                    }
                    .testimonial-name {
                        margin: 0;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }
                    .testimonial-title {
                        margin: 0;
                        font-size: 0.75rem;
                        color: rgba(31, 61, 43, 0.7);
                    }
                    @keyframes marquee {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                    @media (max-width: 1024px) {
                        .marquee-fade {
                            width: 8rem;
                        }
                    }
                    @media (max-width: 640px) {
                        .testimonials {
                            padding: 2rem 0;
                        }
                        .testimonials-heading {
                            padding: 0 1rem;
                        }
                        .marquee-fade {
                            width: 2rem;
                        }
                        .marquee-track {
                            animation-duration: 25s;
                        }
                        .testimonial-card {
                            width: 16rem;
                            padding: 1rem;
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
    fn track_repeats_the_list_once() {
        let track: Vec<_> = marquee_track().collect();
        assert_eq!(track.len(), 2 * TESTIMONIALS.len());
        let (first, second) = track.split_at(TESTIMONIALS.len());
        assert_eq!(first, second);
        assert_eq!(first[0].name, "Jamie");
    }
}
