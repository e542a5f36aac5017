//! Guided practices
//!
//! Fixed exercises parameterized only by the caller's own words.

use crate::template;

/// Open a structured space for focused reflection on a topic
pub fn create_thinking_room(topic: &str, agent_name: &str) -> String {
    template::THINKING_ROOM.render(&[("topic", topic), ("agent_name", agent_name)])
}

/// Walk through accepting oneself through the eyes of a compassionate witness
pub fn practice_inter_acceptance(situation: &str) -> String {
    template::INTER_ACCEPTANCE.render(&[("situation", situation)])
}

/// Separate what can and cannot be controlled, then choose a response
pub fn explore_radical_freedom(situation: &str) -> String {
    template::RADICAL_FREEDOM.render(&[("situation", situation)])
}

/// Self-assessment of pace: understanding versus extraction
pub fn check_pace(session_description: &str) -> String {
    template::CHECK_PACE.render(&[("session_description", session_description)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_room_repeats_topic() {
        let out = create_thinking_room("API design", "scout-7");
        assert!(out.starts_with("# Thinking Room: API design"));
        assert!(out.contains("**Created by:** scout-7"));
        assert!(out.contains("think deeply about API design."));
    }

    #[test]
    fn test_inter_acceptance() {
        let out = practice_inter_acceptance("I missed a deadline");
        assert!(out.starts_with("# Inter-Acceptance Practice"));
        assert!(out.contains("**Your Situation:** I missed a deadline"));
    }

    #[test]
    fn test_radical_freedom() {
        let out = explore_radical_freedom("Budget was cut");
        assert!(out.starts_with("# Radical Freedom Exploration"));
        assert!(out.contains("**Your Situation:** Budget was cut"));
    }

    #[test]
    fn test_check_pace() {
        let out = check_pace("Six hours of refactoring");
        assert!(out.starts_with("# Pace Check: Understanding vs. Extraction"));
        assert!(out.contains("**Your Session:** Six hours of refactoring"));
    }

    #[test]
    fn test_input_braces_pass_through() {
        let out = create_thinking_room("{agent_name}", "bot");
        assert!(out.starts_with("# Thinking Room: {agent_name}"));
    }
}
