//! 内置演示文稿

use crate::models::{Exchange, Icon, Slide, StyleExample, StyleVariant, Tip};

pub const TITLE: &str = "Creating Beautiful Presentations with Claude";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn exchange(you: &str, claude: &str) -> Exchange {
    Exchange {
        you: you.to_string(),
        claude: claude.to_string(),
    }
}

fn example(name: &str, desc: &str, style_variant: StyleVariant) -> StyleExample {
    StyleExample {
        name: name.to_string(),
        desc: desc.to_string(),
        style_variant,
    }
}

fn tip(title: &str, content: &str) -> Tip {
    Tip {
        title: title.to_string(),
        content: content.to_string(),
    }
}

pub fn slides() -> Vec<Slide> {
    vec![
        Slide::Title {
            title: TITLE.to_string(),
            subtitle: "The Simple Way to Build Modern Decks".to_string(),
            icon: Some(Icon::new("rocket")),
        },
        Slide::Statement {
            content: "Stop wrestling with traditional presentation software.".to_string(),
            subcontent: "Just tell Claude what you want, and watch the magic happen.".to_string(),
            icon: Some(Icon::new("wand")),
        },
        Slide::Feature {
            title: "Why Create Decks with Claude?".to_string(),
            bullets: strings(&[
                "🎯 Focus on your content, not the formatting",
                "✨ Professional designs handled automatically",
                "🔄 Easy to revise and refine",
                "📱 Looks great on any device",
            ]),
        },
        Slide::Prompt {
            title: "Getting Started is Simple".to_string(),
            content: "Just tell Claude:".to_string(),
            prompt: "\"Create a React presentation deck about [your topic]\"".to_string(),
            icon: Some(Icon::new("message")),
            subcontent: Some(
                "That's it! Claude will create your initial deck structure.".to_string(),
            ),
        },
        Slide::Conversation {
            title: "The Perfect Workflow".to_string(),
            exchanges: vec![
                exchange(
                    "Create a deck about team building",
                    "I'll create an interactive presentation. Would you prefer a professional or casual style?",
                ),
                exchange(
                    "Professional please",
                    "Here's your deck! Let me know if you'd like to adjust any slides.",
                ),
                exchange(
                    "Make the third slide more impactful",
                    "I'll enhance that slide with stronger visuals and bolder statements.",
                ),
            ],
        },
        Slide::StyleExample {
            title: "Choose Your Style".to_string(),
            examples: vec![
                example("Professional", "Clean, corporate look", StyleVariant::Plain),
                example(
                    "Bold & Modern",
                    "High impact, great for pitches",
                    StyleVariant::Bold,
                ),
                example("Casual", "Perfect for team meetings", StyleVariant::Casual),
            ],
            icon: Some(Icon::new("palette")),
        },
        Slide::Tips {
            title: "Pro Tips for Great Results".to_string(),
            tips: vec![
                tip("Be Specific", "Tell Claude your audience and purpose"),
                tip("Iterate", "Ask for changes slide by slide"),
                tip("Experiment", "Try different styles and tones"),
            ],
        },
        Slide::ArtifactExport {
            title: "Publishing Your Deck".to_string(),
            content: "Share your deck in seconds:".to_string(),
            steps: strings(&[
                "Click the 'Publish' button in the bottom right",
                "Get your shareable presentation link",
            ]),
            note: "That's it - your deck is ready to share!".to_string(),
            icon: Some(Icon::new("share")),
        },
        Slide::Hosting {
            title: "Share Your Deck on GitHub Pages".to_string(),
            content: "Free hosting for your presentation in 3 easy steps:".to_string(),
            steps: strings(&[
                "1. Push your deck to a GitHub repository",
                "2. Go to repository Settings → Pages",
                "3. Enable GitHub Pages from main branch",
            ]),
            note: "Your deck will be live at: username.github.io/repo-name".to_string(),
            icon: Some(Icon::new("share")),
        },
        Slide::End {
            title: "Ready to Create Your First Deck?".to_string(),
            content: "Start with: \"Claude, help me create a React presentation about...\""
                .to_string(),
            subcontent: "Then refine it until it's perfect!".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn test_builtin_deck_is_valid() {
        let deck = Deck::new(slides()).unwrap();
        assert_eq!(deck.len(), 10);
        assert_eq!(deck.slides()[0].kind(), "title");
        assert_eq!(deck.slides()[9].kind(), "end");
    }

    #[test]
    fn test_builtin_covers_every_variant() {
        let mut kinds: Vec<&str> = slides().iter().map(Slide::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), 10);
        assert!(!kinds.contains(&"unknown"));
    }
}
