//! Background music controls: toggle, volume slider and track list.
//!
//! DESIGN
//! ======
//! Every control calls one player operation. When that operation issues a
//! playback start the request is handed to `AppContext::launch_play`, which
//! awaits it off the state borrow and resolves it afterwards.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::player::{PlayRequest, PlayerError};

fn dispatch(app: AppContext, result: Result<Option<PlayRequest>, PlayerError>) {
    match result {
        Ok(Some(request)) => app.launch_play(request),
        Ok(None) => app.sync_player(),
        Err(e) => log::warn!("music control ignored: {e}"),
    }
}

#[component]
pub fn MusicPlayer() -> impl IntoView {
    let app = expect_context::<AppContext>();
    let tracks = app.read(|s| s.player.tracks().to_vec()).unwrap_or_default();
    let panel_open = RwSignal::new(false);

    let on_toggle = move |_| {
        if let Some(request) = app.write(|s| s.player.toggle()) {
            dispatch(app, Ok(request));
        }
    };

    let on_volume = move |ev| {
        let raw = event_target_value(&ev);
        match raw.parse::<f64>() {
            Ok(volume) => {
                if let Some(result) = app.write(|s| s.player.set_volume(volume)) {
                    dispatch(app, result);
                }
            }
            Err(e) => log::warn!("volume input '{raw}' rejected: {e}"),
        }
    };

    let playing = move || app.player.get().is_playing;

    view! {
        <div class="music-player" class:open=move || panel_open.get()>
            <button
                class="music-toggle"
                class:playing=playing
                on:click=on_toggle
                title="Toggle music"
                aria-label="Toggle music"
            >
                <i class=move || if playing() { "fas fa-pause" } else { "fas fa-music" }></i>
            </button>
            <button class="music-panel-toggle" on:click=move |_| panel_open.update(|open| *open = !*open)>
                <i class="fas fa-list"></i>
            </button>
            <div class="music-panel">
                <label class="music-volume">
                    <i class="fas fa-volume-up"></i>
                    <input
                        type="range"
                        min="0"
                        max="1"
                        step="0.01"
                        prop:value=move || app.player.get().volume.to_string()
                        on:input=on_volume
                    />
                </label>
                <ul class="track-list">
                    {tracks
                        .into_iter()
                        .enumerate()
                        .map(|(index, track)| {
                            view! {
                                <li
                                    class="track-item"
                                    class:active=move || app.player.get().current_track_index == index
                                    on:click=move |_| {
                                        if let Some(result) = app.write(|s| s.player.choose_track(index)) {
                                            dispatch(app, result);
                                        }
                                    }
                                >
                                    {track.title}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
