//! Reply template tables and selection.
//!
//! Each emotion category owns a small set of fixed reply templates written
//! in a CBT / reflective-listening register. One template is drawn uniformly
//! at random per reply; the RNG is injectable so tests can pin the draw.

use rand::seq::SliceRandom;
use rand::Rng;

use super::emotion::Emotion;

const ANXIOUS_REPLIES: &[&str] = &[
    "I hear that you're feeling anxious. That must be really difficult. Can you tell me more about what's been triggering these feelings?",
    "Anxiety can feel overwhelming. What thoughts tend to run through your mind when you're feeling this way?",
    "It sounds like you're dealing with a lot of worry. Have you noticed any patterns in when these anxious feelings arise?",
    "Thank you for sharing that. When you feel anxious, what physical sensations do you notice in your body?",
];

const DEPRESSED_REPLIES: &[&str] = &[
    "I'm really sorry you're feeling this way. Depression can make everything feel heavy. What has your day-to-day been like recently?",
    "Thank you for sharing that with me. When you're feeling down, what activities or thoughts tend to make it worse or better?",
    "It takes courage to talk about depression. Can you tell me about a moment recently, even a small one, that felt a bit lighter?",
    "I understand how hard this must be. What used to bring you joy before these feelings started?",
];

const ANGRY_REPLIES: &[&str] = &[
    "It sounds like you're experiencing some strong anger. That's completely valid. What situation is bringing up these feelings?",
    "Anger often comes when we feel wronged or hurt. Can you help me understand what's behind these feelings?",
    "I can hear the frustration in your words. When did you first start noticing this anger building up?",
    "Your feelings are valid. What would you need to happen for this anger to feel resolved?",
];

const OVERWHELMED_REPLIES: &[&str] = &[
    "Feeling overwhelmed is exhausting. Let's take a moment to break things down. What feels most pressing to you right now?",
    "It sounds like you're carrying a lot. Sometimes when we're overwhelmed, it helps to focus on one thing at a time. What's one thing that's weighing on you?",
    "I understand feeling like it's all too much. Can you tell me about what's contributing to this feeling of being overwhelmed?",
    "That sounds like a heavy load. If you could take just one thing off your plate, what would it be?",
];

const CONFUSED_REPLIES: &[&str] = &[
    "Feeling confused or uncertain is very common, and it's okay not to have all the answers. What's making you feel most uncertain right now?",
    "Confusion can be uncomfortable. Let's explore this together. What questions are running through your mind?",
    "It's understandable to feel lost sometimes. Can you tell me more about what's making you feel this way?",
    "Not knowing what to do can be frustrating. What options have you been considering?",
];

const HOPEFUL_REPLIES: &[&str] = &[
    "It's wonderful to hear some hope in your words. What's been helping you feel more positive?",
    "That's really encouraging. What changes have you noticed in yourself or your situation?",
    "I'm glad to hear things are looking up. What's been contributing to this positive shift?",
    "That's great progress. How does it feel to notice these improvements?",
];

const GENERAL_REPLIES: &[&str] = &[
    "Thank you for sharing that with me. Can you tell me more about what's been on your mind?",
    "I'm here to listen. What would be most helpful for you to talk about today?",
    "I appreciate you opening up. What's the most important thing you'd like to explore right now?",
    "I hear you. How long have you been feeling this way?",
    "That's important. Can you help me understand more about your experience?",
];

/// Picks a reply template for a detected emotion.
pub struct ResponseSelector;

impl ResponseSelector {
    /// The template table for an emotion. Categories without their own
    /// table (notably `Crisis`, which is answered by the safety path) fall
    /// back to the general table.
    pub fn templates_for(emotion: Emotion) -> &'static [&'static str] {
        match emotion {
            Emotion::Anxious => ANXIOUS_REPLIES,
            Emotion::Depressed => DEPRESSED_REPLIES,
            Emotion::Angry => ANGRY_REPLIES,
            Emotion::Overwhelmed => OVERWHELMED_REPLIES,
            Emotion::Confused => CONFUSED_REPLIES,
            Emotion::Hopeful => HOPEFUL_REPLIES,
            Emotion::General | Emotion::Crisis => GENERAL_REPLIES,
        }
    }

    /// Draw one template uniformly at random from the process-wide
    /// thread-local source.
    pub fn select(&self, emotion: Emotion) -> &'static str {
        self.select_with(emotion, &mut rand::thread_rng())
    }

    /// Draw one template with a caller-supplied RNG. Tests pass a seeded
    /// `StdRng` to make the draw assertable.
    pub fn select_with<R: Rng + ?Sized>(&self, emotion: Emotion, rng: &mut R) -> &'static str {
        let templates = Self::templates_for(emotion);
        templates.choose(rng).copied().unwrap_or(GENERAL_REPLIES[0])
    }
}
