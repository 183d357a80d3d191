use std::rc::Rc;

use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{CAROUSEL_INTERVAL_MS, CAROUSEL_ITEMS_PER_ROW};
use crate::motion::carousel::{render, CarouselState, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            quote: "Echove matched us with creators who actually use our product. The launch sold out in a week.",
            author: "Dana R.",
            role: "Marketing Lead, Lumen Skincare",
        },
        Testimonial {
            id: 2,
            quote: "Briefs were clear, payments were on time, and the team never disappeared mid-campaign.",
            author: "Marcus T.",
            role: "Tech Creator, 480K followers",
        },
        Testimonial {
            id: 3,
            quote: "We tested six hooks in two weeks and scaled the winner. That speed is hard to find.",
            author: "Priya S.",
            role: "Growth Manager, Koda Coffee",
        },
        Testimonial {
            id: 4,
            quote: "They handled contracts and usage rights so I could focus on making the videos.",
            author: "Lena K.",
            role: "Lifestyle Creator, 1.2M followers",
        },
        Testimonial {
            id: 5,
            quote: "Reporting came with real numbers, not vanity metrics. Our CAC dropped by a third.",
            author: "Jon B.",
            role: "Founder, Velo Bikes",
        },
    ]
}

pub enum CarouselAction {
    Tick,
}

impl Reducible for CarouselState<Testimonial> {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CarouselAction::Tick => {
                let mut next = (*self).clone();
                next.tick();
                next.into()
            }
        }
    }
}

#[function_component(Testimonials)]
pub fn testimonials_carousel() -> Html {
    let carousel = use_reducer(|| CarouselState::new(testimonials()));
    let (width, _height) = use_window_size();

    {
        let carousel = carousel.dispatcher();
        use_interval(
            move || {
                debug!("Rotating testimonials");
                carousel.dispatch(CarouselAction::Tick);
            },
            CAROUSEL_INTERVAL_MS,
        );
    }

    let viewport = Viewport { width };
    let offset = render(&*carousel, &viewport, CAROUSEL_ITEMS_PER_ROW);
    let track_style = if viewport.is_narrow() {
        "transform: none;".to_string()
    } else {
        format!("transform: translateX({}%);", offset)
    };

    html! {
        <div
            class={classes!("t-carousel", viewport.is_narrow().then(|| "is-stacked"))}
            aria-label={carousel.active().map(|t| format!("Testimonial from {}", t.author))}
        >
            <div class="t-track" style={track_style}>
                { for carousel.items().iter().enumerate().map(|(index, item)| html! {
                    <figure
                        key={item.id}
                        class={classes!("t-card", carousel.is_active(index).then(|| "is-active"))}
                    >
                        <blockquote>{item.quote}</blockquote>
                        <figcaption>
                            <strong>{item.author}</strong>
                            <span>{item.role}</span>
                        </figcaption>
                    </figure>
                }) }
            </div>
        </div>
    }
}
