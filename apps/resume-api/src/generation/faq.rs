use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FaqResponse {
    pub faq: &'static [FaqItem],
}

pub static FAQ: [FaqItem; 5] = [
    FaqItem {
        question: "How does the AI Resume Builder work?",
        answer: "Our AI Resume Builder uses advanced AI to analyze your existing resume or \
            LinkedIn profile, then generates an optimized version highlighting your strengths and \
            achievements in a format preferred by recruiters and ATS systems.",
    },
    FaqItem {
        question: "Is my data secure?",
        answer: "Yes, we take data security very seriously. Your resume information is only used \
            to generate improvements and is not shared with third parties. We encrypt sensitive \
            data and don't store your resume permanently unless you create an account.",
    },
    FaqItem {
        question: "How much does it cost?",
        answer: "We offer a one-time payment option that gives you lifetime access to our AI \
            Resume Builder, Cover Letter Generator, and Mock Interview tools - no recurring \
            subscriptions. Check our pricing page for current rates.",
    },
    FaqItem {
        question: "What file formats do you support?",
        answer: "We support .pdf, .doc, .docx, .txt, and .rtf formats for resume uploads. For \
            best results, we recommend using PDF or DOCX formats.",
    },
    FaqItem {
        question: "How do I get a refund?",
        answer: "If you're not satisfied with our tools, simply email us within 30 days of your \
            purchase. We offer a no-questions-asked refund policy to ensure you're completely \
            satisfied.",
    },
];

pub fn faq() -> FaqResponse {
    FaqResponse { faq: &FAQ }
}
