use serde::{Deserialize, Serialize};

fn default_stt() -> String {
    "deepgram/nova-3".to_string()
}

fn default_llm() -> String {
    "google/gemini-2.5-flash".to_string()
}

fn default_tts() -> String {
    "murf/en-US-matthew".to_string()
}

fn default_tts_style() -> String {
    "Conversation".to_string()
}

fn default_vad() -> String {
    "silero".to_string()
}

fn default_turn_detection() -> String {
    "multilingual".to_string()
}

fn default_true() -> bool {
    true
}

/// Models and options the external voice framework runs each session with.
///
/// Nothing here is executed by voxdesk; it is handed to the framework
/// alongside the agent's instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoicePipeline {
    /// Speech-to-text provider and model.
    #[serde(default = "default_stt")]
    pub stt: String,
    /// Language model driving the conversation and tool calls.
    #[serde(default = "default_llm")]
    pub llm: String,
    /// Text-to-speech provider and voice.
    #[serde(default = "default_tts")]
    pub tts: String,
    #[serde(default = "default_tts_style")]
    pub tts_style: String,
    /// Voice-activity detector.
    #[serde(default = "default_vad")]
    pub vad: String,
    /// End-of-turn detector.
    #[serde(default = "default_turn_detection")]
    pub turn_detection: String,
    #[serde(default = "default_true")]
    pub noise_cancellation: bool,
    /// Let the model start drafting a reply before the user finishes.
    #[serde(default = "default_true")]
    pub preemptive_generation: bool,
}

impl Default for VoicePipeline {
    fn default() -> Self {
        Self {
            stt: default_stt(),
            llm: default_llm(),
            tts: default_tts(),
            tts_style: default_tts_style(),
            vad: default_vad(),
            turn_detection: default_turn_detection(),
            noise_cancellation: true,
            preemptive_generation: true,
        }
    }
}
