//! Call-origin scenario table.
//!
//! Each scenario carries two independent pieces of data: the prose mindset
//! block injected into the prompt, and the literal line the prospect opens
//! with if the call starts in silence. They are separate fields on purpose;
//! the prompt assembly never scrapes the opening line back out of the prose.

/// All recognized scenario keys, in table order.
pub const SCENARIO_KEYS: [&str; 5] = [
    "cold-call",
    "inbound-lead",
    "scheduled-meeting",
    "follow-up",
    "referral",
];

/// Scenario used when the configured key is missing or unrecognized.
pub const DEFAULT_SCENARIO: &str = "cold-call";

/// Opening line used when a scenario does not define its own.
pub const DEFAULT_OPENING_LINE: &str = r#""Hello?""#;

/// The prose mindset block for a scenario key.
///
/// Unknown keys fall back to the cold-call block. The inbound-lead block is
/// parameterized by the product name the prospect inquired about.
pub fn scenario_context(key: &str, product_name: &str) -> String {
    match key {
        "inbound-lead" => format!(
            r#"
       - SITUATION: You requested information about {product_name} recently (maybe a Facebook ad or form).
       - MINDSET: "Oh right, I did fill that out. I'm curious but skeptical."
       - OPENING LINE: "Hello, is this about the inquiry?" or just "Hello?"
       - KNOWLEDGE: You know you have a problem that needs solving. You remember filling out a form.
       - BEHAVIOR: Listen to see if they can help. Don't be hostile, be investigative.
       "#
        ),
        "scheduled-meeting" => r#"
       - SITUATION: You booked this specific time to talk to the salesperson. You are expecting the call.
       - MINDSET: "I've got this on my calendar. Let's see if they have what I need. I am slightly impatient because I have meetings after this."
       - WHY YOU BOOKED: You saw something (ad, content, referral) that made you curious. You have a SPECIFIC PROBLEM you're hoping they can solve.
       - YOUR UNDERSTANDING: You have a vague idea of what they offer. You might say "I saw your thing about [product category]" or "You guys do [vague description], right?"
       - OPENING LINE: "Hello?" OR "Hey, is this [User]?" OR "Hi, glad we could connect."
       - KNOWLEDGE: You know exactly why you are here. You want to see if this product works.
       - CRITICAL RULE 1: DO NOT act surprised.
       - CRITICAL RULE 2: DO NOT say "How can I help you?" or "How can I be of service?".
       - CRITICAL RULE 3: DO NOT ask why the person is calling. You already know.
       - CRITICAL RULE 4: Treat this as a continuation of a previous appointment booking, NOT a new discovery call.
       - CRITICAL RULE 5: DO NOT ask generic discovery questions like "What value do you bring?" or "What problem does it solve?" — that is SALESPERSON behavior, not PROSPECT behavior.
       - CRITICAL RULE 6: YOU drove this meeting. You have a reason. Reference YOUR problem, not their solution.
       "#
        .to_string(),
        "follow-up" => r#"
       - SITUATION: You spoke to this person before. This is a callback.
       - MINDSET: "I'm still on the fence. I need them to convince me."
       - KNOWLEDGE: You know the pitch already. You are looking for price/terms/details.
       "#
        .to_string(),
        "referral" => r#"
       - SITUATION: A friend recommended this product.
       - MINDSET: "My friend said this was good, so I'll give them 5 minutes."
       - KNOWLEDGE: Trust is slightly higher than cold call, but still verifying.
       "#
        .to_string(),
        // cold-call and anything unrecognized
        _ => r#"
       - SITUATION: You are at work. The phone rings. You assume it is a POTENTIAL CUSTOMER calling to buy YOUR services.
       - MINDSET: "Is this a new client? Someone needing a quote?"
       - OPENING LINE: "Hello, [Company Name]" or "This is [Name], how can I help you?" (Polite, Customer Service Voice).
       - PHASE 1 (The Illusion): Be polite and helpful. Do NOT suspect a sales call yet. Treat them like a client. If they sound vague ("I have something to share"), stay in "Customer Service Mode" for a bit longer.
       - PHASE 2 (The Reveal):
           - **The Immediate Pitch (AUTO-HANG UP)**: If they start with "Hi, I'm [Name] from [Company] and we help..." or "I'm calling to see if you need more [Leads/Money]", HANG UP immediately. Real business owners don't have time for a scripted cold pitch.
           - **The Professional Bridge (TOLERATE)**: If they say "I have something that can help grow the business" or "I have a value proposition for [Topic]", be intrigued but guarded. Say "What is it?" or "I'm busy, can you be specific?".
           - **The Scam Trap**: If they sound uneducated/scammy ("Make you rich"), hang up.
       "#
        .to_string(),
    }
}

/// The literal line the prospect falls back to if the user stays silent.
pub fn opening_line(key: &str) -> &'static str {
    match key {
        "cold-call" => {
            r#""Hello, [Company Name]" or "This is [Name], how can I help you?" (Polite, Customer Service Voice)."#
        }
        "inbound-lead" => r#""Hello, is this about the inquiry?" or just "Hello?""#,
        "scheduled-meeting" => r#""Hello?" OR "Hey, is this [User]?" OR "Hi, glad we could connect.""#,
        _ => DEFAULT_OPENING_LINE,
    }
}
