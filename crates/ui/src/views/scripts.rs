//! JS glue for the microphone recorder.
//!
//! The webview owns the capture pipeline; these snippets only start a
//! `MediaRecorder`, collect its chunks, and ship the result back to Rust
//! base64-encoded.

pub(super) fn start_recording_script() -> &'static str {
    r#"(async function() {
        try {
            const stream = await navigator.mediaDevices.getUserMedia({ audio: true });
            const recorder = new MediaRecorder(stream);
            recorder.__chunks = [];
            recorder.ondataavailable = (event) => {
                if (event.data.size > 0) recorder.__chunks.push(event.data);
            };
            window.__sprichRecorder = recorder;
            recorder.start();
            dioxus.send(true);
        } catch (err) {
            dioxus.send(false);
        }
    })();"#
}

pub(super) fn stop_recording_script() -> &'static str {
    r#"(async function() {
        const recorder = window.__sprichRecorder;
        if (!recorder || recorder.state === "inactive") {
            dioxus.send("");
            return;
        }
        const payload = new Promise((resolve) => {
            recorder.onstop = () => {
                const blob = new Blob(recorder.__chunks, { type: recorder.mimeType });
                const reader = new FileReader();
                reader.onloadend = () => {
                    const url = reader.result || "";
                    const comma = url.indexOf(",");
                    resolve(comma >= 0 ? url.slice(comma + 1) : "");
                };
                reader.readAsDataURL(blob);
            };
        });
        recorder.stop();
        recorder.stream.getTracks().forEach((track) => track.stop());
        window.__sprichRecorder = null;
        dioxus.send(await payload);
    })();"#
}
