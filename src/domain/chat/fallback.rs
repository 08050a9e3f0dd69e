//! Offline/demo chat responder used when the chatbot endpoint is down.

/// Ordered trigger table; the first keyword contained in the lowercased
/// message wins.
const CAREER_RESPONSES: &[(&str, &str)] = &[
    (
        "skills",
        "I'd recommend focusing on in-demand skills like Python, JavaScript, data analysis, or cloud computing. Visit our Skills Manager to track your progress!",
    ),
    (
        "career",
        "Great question! Our Career Roadmap feature can help you explore different paths. Would you like to check out personalized recommendations?",
    ),
    (
        "resume",
        "For resume improvement, try our AI Resume Analyzer - it provides detailed feedback and optimization suggestions!",
    ),
    (
        "interview",
        "Interview preparation is crucial! While we're developing our Interview Lab, I recommend practicing common questions and researching the company.",
    ),
    (
        "salary",
        "Salary insights vary by location and experience. Check our Market Insights section for current industry trends!",
    ),
    (
        "learning",
        "Continuous learning is key! Our platform offers personalized learning recommendations based on your career goals.",
    ),
    (
        "test",
        "Take our Career Assessment tests to discover your strengths and ideal career paths!",
    ),
    (
        "community",
        "Connect with like-minded professionals in our Community section - it's great for networking and advice!",
    ),
];

const DEFAULT_RESPONSE: &str = "That's an interesting question! I'm here to help with career guidance, skills development, resume tips, and job market insights. What specific area would you like to explore?";

pub fn offline_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    CAREER_RESPONSES
        .iter()
        .find(|(keyword, _)| message.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_RESPONSE)
}
