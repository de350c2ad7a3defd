pub fn creative_prompt(text: &str) -> String {
    format!("In one catchy sentence, describe this weather: {text}")
}

pub fn strip_prompt(prompt: &str, raw: &str) -> String {
    raw.replace(prompt, "").trim().to_string()
}

pub fn to_one_liner(cleaned: &str) -> String {
    let flat = cleaned.replace('\n', " ").replace('\r', "");
    let flat = flat.trim();

    // Keep only the first sentence when the model rambles on.
    match flat.split_once('.') {
        Some((first_sentence, _)) => format!("{first_sentence}."),
        None => flat.to_string(),
    }
}
