use std::rc::Rc;

use dioxus::document::eval;
use dioxus::prelude::*;

use services::SpokenPrompt;

use super::scripts::{start_recording_script, stop_recording_script};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DrillIntent, DrillVm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RecorderState {
    Idle,
    Recording,
    Checking,
}

#[component]
pub fn DrillView() -> Element {
    let ctx = use_context::<AppContext>();
    let drill = ctx.drill_loop();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<DrillVm>);
    let recorder = use_signal(|| RecorderState::Idle);
    let prompt_audio = use_signal(|| None::<Rc<SpokenPrompt>>);
    let mut spoken_for = use_signal(|| None::<usize>);

    let drill_for_resource = drill.clone();
    let resource = use_resource(move || {
        let drill = drill_for_resource.clone();
        let mut vm = vm;
        async move {
            let entries = drill.load_deck().await.map_err(|_| ViewError::Unknown)?;
            vm.set(Some(DrillVm::new(entries)));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    // Fetch spoken audio whenever the current card changes. Replacing the
    // signal drops the previous prompt, and with it the previous temp file.
    let drill_for_speech = drill.clone();
    use_effect(move || {
        let current = vm.read().as_ref().and_then(|vm| {
            vm.current_card()
                .map(|card| (vm.current_index(), card.source_word))
        });
        let Some((index, word)) = current else {
            return;
        };
        if spoken_for() == Some(index) {
            return;
        }
        spoken_for.set(Some(index));
        let drill = drill_for_speech.clone();
        let mut prompt_audio = prompt_audio;
        spawn(async move {
            let spoken = drill.speak(&word).await;
            prompt_audio.set(spoken.map(Rc::new));
        });
    });

    let dispatch_intent = {
        let drill = drill.clone();
        use_callback(move |intent: DrillIntent| {
            let mut error = error;
            let mut vm = vm;
            let mut recorder = recorder;

            match intent {
                DrillIntent::RecordingComplete(audio) => {
                    let drill = drill.clone();
                    spawn(async move {
                        recorder.set(RecorderState::Checking);
                        let local_vm = { vm.write().take() };

                        let Some(mut vm_value) = local_vm else {
                            recorder.set(RecorderState::Idle);
                            error.set(Some(ViewError::Unknown));
                            return;
                        };

                        vm_value.check_recording(&drill, &audio).await;

                        // Always put the session back so the page stays usable.
                        {
                            let mut guard = vm.write();
                            *guard = Some(vm_value);
                        }
                        recorder.set(RecorderState::Idle);
                        error.set(None);
                    });
                }
                DrillIntent::Next => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.next();
                    }
                }
            }
        })
    };

    let on_start_recording = use_callback(move |()| {
        let mut recorder = recorder;
        spawn(async move {
            let mut request = eval(start_recording_script());
            match request.recv::<bool>().await {
                Ok(true) => recorder.set(RecorderState::Recording),
                // Mic denied or unavailable: stay idle, nothing to surface.
                Ok(false) | Err(_) => recorder.set(RecorderState::Idle),
            }
        });
    });

    let on_stop_recording = {
        let dispatch_intent = dispatch_intent;
        use_callback(move |()| {
            let mut recorder = recorder;
            spawn(async move {
                let mut request = eval(stop_recording_script());
                let encoded = match request.recv::<String>().await {
                    Ok(encoded) => encoded,
                    Err(_) => {
                        recorder.set(RecorderState::Idle);
                        return;
                    }
                };
                let decoded = base64::Engine::decode(
                    &base64::engine::general_purpose::STANDARD,
                    encoded.as_bytes(),
                );
                match decoded {
                    Ok(audio) if !audio.is_empty() => {
                        dispatch_intent.call(DrillIntent::RecordingComplete(audio));
                    }
                    _ => recorder.set(RecorderState::Idle),
                }
            });
        })
    };

    let vm_guard = vm.read();
    let card = vm_guard.as_ref().and_then(DrillVm::current_card);
    let feedback = vm_guard.as_ref().and_then(DrillVm::feedback);
    let position_label = vm_guard.as_ref().map(DrillVm::position_label);
    let has_cards = vm_guard.as_ref().is_some_and(DrillVm::has_cards);
    drop(vm_guard);
    let audio_url = prompt_audio.read().as_ref().map(|prompt| prompt.data_url());
    let recorder_state = recorder();
    let view_error = error();

    rsx! {
        div { class: "page drill-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "drill-loading", "Loading deck..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(()) => {
                    if !has_cards {
                        rsx! {
                            p { class: "drill-empty", "No words available. Check your vocabulary file." }
                        }
                    } else {
                        rsx! {
                            if let Some(card) = card.as_ref() {
                                header { class: "drill-card",
                                    h1 { class: "drill-word", "{card.source_word}" }
                                    p { class: "drill-translation", "{card.translation}" }
                                    if let Some(label) = position_label.as_ref() {
                                        span { class: "drill-position", "{label}" }
                                    }
                                }
                                section { class: "drill-step",
                                    h3 { class: "drill-step-title", "1. Listen" }
                                    if let Some(url) = audio_url.as_ref() {
                                        audio {
                                            class: "drill-audio",
                                            controls: true,
                                            src: "{url}",
                                        }
                                    }
                                }
                                section { class: "drill-step",
                                    h3 { class: "drill-step-title", "2. Speak" }
                                    p { class: "drill-hint", "Tap Start, speak the word, then tap Stop." }
                                    div { class: "drill-recorder",
                                        match recorder_state {
                                            RecorderState::Idle => rsx! {
                                                button {
                                                    id: "drill-record-start",
                                                    class: "btn btn-primary",
                                                    r#type: "button",
                                                    onclick: move |_| on_start_recording.call(()),
                                                    "Start Recording"
                                                }
                                            },
                                            RecorderState::Recording => rsx! {
                                                button {
                                                    id: "drill-record-stop",
                                                    class: "btn btn-danger",
                                                    r#type: "button",
                                                    onclick: move |_| on_stop_recording.call(()),
                                                    "Stop & Check"
                                                }
                                            },
                                            RecorderState::Checking => rsx! {
                                                button {
                                                    class: "btn btn-primary",
                                                    r#type: "button",
                                                    disabled: true,
                                                    "Checking..."
                                                }
                                            },
                                        }
                                    }
                                    if let Some(feedback) = feedback.as_ref() {
                                        p { class: "drill-feedback {feedback.tone.css_class()}", "{feedback.message}" }
                                    }
                                    if let Some(err) = view_error {
                                        p { class: "drill-feedback drill-feedback--error", "{err.message()}" }
                                    }
                                }
                                div { class: "view-divider" }
                                button {
                                    id: "drill-next",
                                    class: "btn btn-primary drill-next",
                                    r#type: "button",
                                    onclick: move |_| dispatch_intent.call(DrillIntent::Next),
                                    "Next Word"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
