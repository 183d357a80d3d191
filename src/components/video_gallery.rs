use std::rc::Rc;

use log::debug;
use web_sys::{Event, HtmlMediaElement, MouseEvent};
use yew::prelude::*;

use crate::dom::play_quietly;
use crate::state::video::{Playback, VideoCommand, VideoGallery};

struct Campaign {
    brand: &'static str,
    title: &'static str,
    src: &'static str,
    poster: &'static str,
}

const CAMPAIGNS: [Campaign; 4] = [
    Campaign {
        brand: "Lumen Skincare",
        title: "Morning routine series",
        src: "/assets/campaigns/lumen.mp4",
        poster: "/assets/campaigns/lumen.jpg",
    },
    Campaign {
        brand: "Northwind Audio",
        title: "Studio session launch",
        src: "/assets/campaigns/northwind.mp4",
        poster: "/assets/campaigns/northwind.jpg",
    },
    Campaign {
        brand: "Koda Coffee",
        title: "Creator taste test",
        src: "/assets/campaigns/koda.mp4",
        poster: "/assets/campaigns/koda.jpg",
    },
    Campaign {
        brand: "Velo Bikes",
        title: "City commute challenge",
        src: "/assets/campaigns/velo.mp4",
        poster: "/assets/campaigns/velo.jpg",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoAction {
    /// Tap on a box, with its element's playback at the moment of the tap.
    Press(usize, Playback),
    Ended(usize),
}

impl Reducible for VideoGallery {
    type Action = VideoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            VideoAction::Press(index, live) => next.press(index, live),
            VideoAction::Ended(index) => next.ended(index),
        }
        next.into()
    }
}

/// Tap-to-play campaign reels; at most one plays at a time.
#[function_component(CampaignVideos)]
pub fn campaign_videos() -> Html {
    let gallery = use_reducer(|| VideoGallery::new(CAMPAIGNS.len()));
    let videos = use_memo(
        |_| (0..CAMPAIGNS.len()).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );

    // Phones only autoplay inline and muted.
    {
        let videos = videos.clone();
        use_effect_with_deps(
            move |_| {
                for video in videos.iter().filter_map(|n| n.cast::<HtmlMediaElement>()) {
                    video.set_muted(true);
                    let _ = video.set_attribute("muted", "");
                    let _ = video.set_attribute("playsinline", "");
                    let _ = video.set_attribute("webkit-playsinline", "");
                }
                || ()
            },
            (),
        );
    }

    // Bring the media elements in line with the gallery after every change.
    {
        let videos = videos.clone();
        use_effect_with_deps(
            move |gallery: &VideoGallery| {
                let elements: Vec<Option<HtmlMediaElement>> =
                    videos.iter().map(|n| n.cast::<HtmlMediaElement>()).collect();
                let actual: Vec<Playback> = elements
                    .iter()
                    .map(|el| match el {
                        Some(video) if !video.paused() => Playback::Playing,
                        _ => Playback::Paused,
                    })
                    .collect();

                if let Some(index) = gallery.playing() {
                    debug!("Playing campaign video {}", index);
                }
                for command in gallery.reconcile(&actual) {
                    match command {
                        VideoCommand::Pause(index) => {
                            if let Some(Some(video)) = elements.get(index) {
                                let _ = video.pause();
                            }
                        }
                        VideoCommand::Play(index) => {
                            if let Some(Some(video)) = elements.get(index) {
                                play_quietly(video);
                            }
                        }
                    }
                }
                || ()
            },
            (*gallery).clone(),
        );
    }

    html! {
        <div class="video-grid">
            { for CAMPAIGNS.iter().enumerate().map(|(index, campaign)| {
                let onclick = {
                    let gallery = gallery.dispatcher();
                    let video = videos[index].clone();
                    Callback::from(move |_: MouseEvent| {
                        let live = match video.cast::<HtmlMediaElement>() {
                            Some(el) if !el.paused() => Playback::Playing,
                            _ => Playback::Paused,
                        };
                        gallery.dispatch(VideoAction::Press(index, live))
                    })
                };
                let onended = {
                    let gallery = gallery.dispatcher();
                    Callback::from(move |_: Event| gallery.dispatch(VideoAction::Ended(index)))
                };

                html! {
                    <div
                        class={classes!("video-box", gallery.is_playing(index).then(|| "playing"))}
                        {onclick}
                    >
                        <video
                            ref={videos[index].clone()}
                            src={campaign.src}
                            poster={campaign.poster}
                            preload="metadata"
                            {onended}
                        />
                        <div class="video-overlay">
                            <span class="play-icon">{"▶"}</span>
                        </div>
                        <div class="video-caption">
                            <strong>{campaign.brand}</strong>
                            <span>{campaign.title}</span>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
