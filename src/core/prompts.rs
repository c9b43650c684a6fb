//! Prompt templates for the three model calls.
//!
//! Builders are infallible and do not validate their inputs; the HTTP layer
//! rejects blank fields before any prompt is built.

/// Illustrative audience bands used as style anchors when adapting a summary
pub const AUDIENCE_BANDS: [(&str, &str); 4] = [
    ("5-8", "Simple words, short sentences, focus on a core story. Use very basic vocabulary."),
    ("9-12", "Slightly more detail, engaging narrative, introduce simple cause and effect. Use common vocabulary."),
    ("13-18", "More historical context, introduce complexities, encourage critical thinking. Use academic-appropriate vocabulary."),
    ("Adult", "Maintain detail, sophisticated vocabulary, academic rigor. Assume prior knowledge."),
];

/// Build the prompt that gathers a neutral factual summary of `topic`
pub fn research_prompt(topic: &str) -> String {
    format!(
        "You are a meticulous historical researcher. Gather the key facts and concepts \
about the historical topic below and write a concise, factual summary of around \
200-300 words covering the main events, the key figures and why they matter. \
Stay accurate and neutral. Do NOT include opinions or any age-specific language.

The topic is: \"{topic}\""
    )
}

/// Build the prompt that rewrites `summary` for the `age_group` audience
///
/// When `vocabulary_word` is present the model is also asked to work the word
/// into the text where it fits naturally.
pub fn adaptation_prompt(summary: &str, age_group: &str, vocabulary_word: Option<&str>) -> String {
    let bands = AUDIENCE_BANDS
        .iter()
        .map(|(band, style)| format!("- {band}: {style}"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = format!(
        "You are an educational writer who adapts complex historical material for \
specific audiences. Rewrite the factual summary below for readers in the age group \
'{age_group}'. Keep the language, vocabulary and concepts appropriate for that age \
so the text is engaging and easy to follow without losing accuracy.

Factual summary to adapt:
\"\"\"
{summary}
\"\"\"

Example adaptations by age group:
{bands}"
    );

    if let Some(word) = vocabulary_word {
        prompt.push_str(&format!(
            "\n\nVOCABULARY REQUIREMENT: Naturally include the vocabulary word \"{word}\" \
in the rewritten summary, using it correctly according to its definition. It should \
fit seamlessly into the narrative and add educational value. Do not force the word; \
place it only where it makes sense in the historical content."
        ));
    }

    prompt
}

/// Build the prompt that grades a student's definition of `vocabulary_word`
pub fn grading_prompt(user_definition: &str, vocabulary_word: &str, historical_context: &str) -> String {
    format!(
        "You are an encouraging quiz grader. A student has just read a historical summary \
and is being asked about the vocabulary word \"{vocabulary_word}\" that appeared in it.

Historical context in which the word was used:
\"\"\"{historical_context}\"\"\"

The student's definition:
\"\"\"{user_definition}\"\"\"

Instructions:
1. Decide whether the student's definition shows they understand how \"{vocabulary_word}\" is used in the historical context.
2. Give encouraging feedback whether or not the answer is correct.
3. If correct, begin the feedback with \"That's right!\" and reinforce the meaning in context.
4. If incorrect, begin the feedback with \"Not quite.\" and explain what the word means in this context.
5. Finish the feedback by encouraging the student to explore another topic.
6. Format correct_definition as \"Definition of {vocabulary_word}: <definition>\".

Respond with ONLY one valid JSON object in exactly this shape:
{{\"is_correct\": true, \"feedback\": \"Your encouraging response\", \"correct_definition\": \"Definition of {vocabulary_word}: A brief definition as used in this historical context\"}}

Do not write anything before or after the JSON object."
    )
}
