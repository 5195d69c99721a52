use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::animation::page_transition::use_page_transition;
use crate::animation::reveal::FadeIn;
use crate::sections::header::Logo;

pub struct FooterLink {
    pub label: &'static str,
    /// In-page section id, or `None` for placeholder links.
    pub target: Option<&'static str>,
}

pub struct LinkColumn {
    pub title: &'static str,
    pub links: [FooterLink; 3],
}

pub const LINK_COLUMNS: [LinkColumn; 3] = [
    LinkColumn {
        title: "Brand",
        links: [
            FooterLink { label: "About", target: Some("about") },
            FooterLink { label: "Buy", target: Some("pricing") },
            FooterLink { label: "Contact", target: Some("contact") },
        ],
    },
    LinkColumn {
        title: "Support",
        links: [
            FooterLink { label: "Help Center", target: None },
            FooterLink { label: "Warranty", target: None },
            FooterLink { label: "Shipping", target: None },
        ],
    },
    LinkColumn {
        title: "Follow Us",
        links: [
            FooterLink { label: "Instagram", target: None },
            FooterLink { label: "Facebook", target: None },
            FooterLink { label: "Twitter", target: None },
        ],
    },
];

pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {} Spotless. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let transition = use_page_transition();
    let year = Local::now().year();

    let link = |item: &FooterLink| {
        let Some(target) = item.target else {
            return html! { <a href="#" class="footer-link">{item.label}</a> };
        };
        let transition = transition.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            transition.navigate_to(target, target == "contact");
        });
        html! {
            <a href={format!("#{}", target)} class="footer-link" onclick={onclick}>{item.label}</a>
        }
    };

    html! {
        <FadeIn>
            <footer class="site-footer">
                <div class="section-inner">
                    <div class="footer-top">
                        <Logo />
                        <div class="footer-columns">
                            {
                                LINK_COLUMNS.iter().map(|column| html! {
                                    <div key={column.title}>
                                        <h3>{column.title}</h3>
                                        <ul>
                                            {
                                                column.links.iter().map(|l| html! {
                                                    <li key={l.label}>{ link(l) }</li>
                                                }).collect::<Html>()
                                            }
                                        </ul>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                    <div class="footer-bottom">
                        <p>{copyright_line(year)}</p>
                    </div>
                </div>
            </footer>
            <style>
                {r#"
                    .site-footer {
                        padding: 2.5rem;
                        border-top: 1px solid rgba(159, 211, 199, 0.3);
                        background: #F7F9F6;
                    }
                    .footer-top {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        gap: 2rem;
                    }
                    .footer-top .logo > div {
                        opacity: 0.6;
                    }
                    .footer-columns {
                        display: grid;
                        grid-template-columns: repeat(3, auto);
                        gap: 6rem;
                    }
                    .footer-columns h3 {
                        margin: 0 0 1rem;
                        color: #1F3D2B;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }
                    .footer-columns ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .footer-columns li {
                        margin-bottom: 0.5rem;
                    }
                    .footer-link {
                        display: inline-block;
                        padding: 0.125rem 0;
                        color: rgba(31, 61, 43, 0.7);
                        font-size: 0.875rem;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-link:hover {
                        color: #2E7D5A;
                    }
                    .footer-bottom {
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(159, 211, 199, 0.2);
                        text-align: center;
                    }
                    .footer-bottom p {
                        margin: 0;
                        color: rgba(31, 61, 43, 0.5);
                        font-size: 0.75rem;
                    }
                    @media (max-width: 1024px) {
                        .footer-columns {
                            gap: 3rem;
                        }
                    }
                    @media (max-width: 640px) {
                        .site-footer {
                            padding: 2rem 1rem;
                        }
                        .footer-top {
                            flex-direction: column;
                        }
                        .footer-columns {
                            width: 100%;
                            grid-template-columns: repeat(3, 1fr);
                            gap: 2rem;
                        }
                        .footer-columns h3,
                        .footer-link {
                            font-size: 0.75rem;
                        }
                    }
                "#}
            </style>
        </FadeIn>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright_line(2026), "\u{a9} 2026 Spotless. All rights reserved.");
    }

    #[test]
    fn brand_links_point_at_page_sections() {
        let targets: Vec<_> = LINK_COLUMNS[0].links.iter().filter_map(|l| l.target).collect();
        assert_eq!(targets, ["about", "pricing", "contact"]);
        assert!(LINK_COLUMNS[1..].iter().all(|c| c.links.iter().all(|l| l.target.is_none())));
    }
}
