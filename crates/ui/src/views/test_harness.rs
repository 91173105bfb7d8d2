use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{
    DrillLoopService, RecognitionError, Recognizer, SpokenPrompt, SynthesisError, Synthesizer,
};
use sprich_core::model::VocabEntry;
use storage::InMemoryVocab;

use crate::context::{UiApp, build_app_context};
use crate::views::DrillView;

pub struct StubSynthesizer {
    pub fail: bool,
}

#[async_trait::async_trait]
impl Synthesizer for StubSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<SpokenPrompt, SynthesisError> {
        if self.fail {
            return Err(SynthesisError::EmptyText);
        }
        Ok(SpokenPrompt::from_bytes(
            b"fake-mp3".to_vec(),
            "audio/mpeg",
            ".mp3",
        )?)
    }
}

pub struct StubRecognizer {
    pub transcript: Option<&'static str>,
}

#[async_trait::async_trait]
impl Recognizer for StubRecognizer {
    async fn recognize(&self, _audio: &[u8]) -> Result<Option<String>, RecognitionError> {
        Ok(self.transcript.map(str::to_string))
    }
}

struct TestApp {
    drill: Arc<DrillLoopService>,
}

impl UiApp for TestApp {
    fn drill_loop(&self) -> Arc<DrillLoopService> {
        Arc::clone(&self.drill)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! {
        DrillView {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_drill_harness(entries: Vec<VocabEntry>, synthesis_fails: bool) -> ViewHarness {
    let drill = Arc::new(DrillLoopService::new(
        Arc::new(InMemoryVocab::new(entries)),
        Arc::new(StubSynthesizer {
            fail: synthesis_fails,
        }),
        Arc::new(StubRecognizer { transcript: None }),
    ));
    let app = Arc::new(TestApp { drill });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app });
    ViewHarness { dom }
}
