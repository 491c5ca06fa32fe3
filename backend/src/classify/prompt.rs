use super::models::{ChatMessage, ChatRequest};

pub const SYSTEM_INSTRUCTION: &str =
    "Du klassificerer fødevarer i NOVA 1–4 og svarer kort på dansk.";

/// Low temperature keeps the reply close to the requested JSON shape.
pub const TEMPERATURE: f32 = 0.1;

pub fn user_prompt(ingredients: &str) -> String {
    format!(
        "Du er en NOVA-klassifikationsassistent.\n\
         Returnér KUN et JSON-objekt:\n\
         {{\"category\":1|2|3|4,\"description\":\"kort sætning på dansk hvorfor.\"}}\n\
         \n\
         Ingrediensliste:\n\
         {}",
        ingredients
    )
    .trim()
    .to_string()
}

pub fn build_request(model: &str, ingredients: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_INSTRUCTION),
            ChatMessage::user(user_prompt(ingredients)),
        ],
        temperature: TEMPERATURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_demands_bare_json_and_embeds_ingredients() {
        let prompt = user_prompt("sukker, salt, hvedemel");
        assert!(prompt.starts_with("Du er en NOVA-klassifikationsassistent."));
        let shape = r#"{"category":1|2|3|4,"description":"kort sætning på dansk hvorfor."}"#;
        assert!(prompt.contains(shape));
        assert!(prompt.ends_with("Ingrediensliste:\nsukker, salt, hvedemel"));
    }

    #[test]
    fn request_carries_system_and_user_messages() {
        let request = build_request("gpt-4o-mini", "mælk");
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.temperature, TEMPERATURE);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0], ChatMessage::system(SYSTEM_INSTRUCTION));
        assert_eq!(request.messages[1].role, "user");
        assert!(request.messages[1].content.ends_with("mælk"));
    }

    #[test]
    fn request_serializes_in_chat_completion_shape() {
        let body = serde_json::to_value(build_request("m", "x")).unwrap();
        assert_eq!(body["model"], "m");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert!(body["temperature"].as_f64().unwrap() < 0.2);
    }
}
