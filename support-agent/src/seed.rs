//! Built-in Thoughtful AI support pairs: `(question, answer, keywords)`.

pub(crate) const SUPPORT_PAIRS: &[(&str, &str, &[&str])] = &[
    (
        "What does the eligibility verification agent (EVA) do?",
        "EVA automates the process of verifying a patient's eligibility and benefits information in real-time, eliminating manual data entry errors and reducing claim rejections.",
        &[
            "eva",
            "eligibility",
            "verification",
            "agent",
            "patient",
            "benefits",
            "eligibility verification agent",
        ],
    ),
    (
        "What does the claims processing agent (CAM) do?",
        "CAM streamlines the submission and management of claims, improving accuracy, reducing manual intervention, and accelerating reimbursements.",
        &[
            "cam",
            "claims",
            "processing",
            "agent",
            "submission",
            "management",
            "claims processing agent",
        ],
    ),
    (
        "How does the payment posting agent (PHIL) work?",
        "PHIL automates the posting of payments to patient accounts, ensuring fast, accurate reconciliation of payments and reducing administrative burden.",
        &[
            "phil",
            "payment",
            "posting",
            "agent",
            "accounts",
            "reconciliation",
            "payment posting agent",
        ],
    ),
    (
        "Tell me about Thoughtful AI's Agents.",
        "Thoughtful AI provides a suite of AI-powered automation agents designed to streamline healthcare processes. These include Eligibility Verification (EVA), Claims Processing (CAM), and Payment Posting (PHIL), among others.",
        &[
            "thoughtful ai",
            "agents",
            "automation",
            "suite",
            "eva",
            "cam",
            "phil",
            "healthcare",
        ],
    ),
    (
        "What are the benefits of using Thoughtful AI's agents?",
        "Using Thoughtful AI's Agents can significantly reduce administrative costs, improve operational efficiency, and reduce errors in critical processes like claims management and payment posting.",
        &[
            "benefits",
            "advantages",
            "reduce costs",
            "efficiency",
            "errors",
            "administrative",
            "claims management",
        ],
    ),
    (
        "What is Thoughtful AI?",
        "Thoughtful AI is a leading artificial intelligence company that specializes in developing intelligent automation solutions for businesses. We focus on creating AI systems that enhance human capabilities and streamline complex workflows.",
        &["what is", "thoughtful ai", "company", "about"],
    ),
    (
        "What services does Thoughtful AI offer?",
        "Thoughtful AI offers a comprehensive suite of AI services including: intelligent document processing, automated data extraction, workflow automation, custom AI model development, and AI integration consulting. We help businesses automate repetitive tasks and make data-driven decisions.",
        &["services", "offer", "products", "solutions", "what do you do"],
    ),
    (
        "How can I contact Thoughtful AI support?",
        "You can contact Thoughtful AI support through multiple channels: Email us at support@thoughtfulai.com, use this chat interface for immediate assistance, or visit our website's contact page. Our support team is available Monday through Friday, 9 AM to 6 PM EST.",
        &["contact", "support", "help", "reach", "email"],
    ),
    (
        "What are Thoughtful AI's pricing plans?",
        "Thoughtful AI offers flexible pricing plans tailored to different business needs: Starter Plan for small teams, Professional Plan for growing businesses, and Enterprise Plan for large organizations. Contact our sales team for detailed pricing information and custom solutions.",
        &["pricing", "cost", "plans", "price", "how much"],
    ),
    (
        "Is my data secure with Thoughtful AI?",
        "Yes, data security is our top priority. Thoughtful AI implements enterprise-grade security measures including end-to-end encryption, SOC 2 compliance, GDPR compliance, and regular security audits. Your data is processed securely and never shared with third parties.",
        &["security", "data protection", "privacy", "secure", "safe"],
    ),
];
