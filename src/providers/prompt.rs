pub const SYSTEM_PROMPT: &str = "Translate the user's input into English. \
     Use a direct, literal translation style. \
     Do not paraphrase or explain. \
     Output only the translation, nothing else.";
