use podcaster_config::Config;

/// Guidance sent to clients on how to script a podcast for this server
pub fn server_instructions(config: &Config) -> String {
    let speaker1 = &config.speaker1_name;
    let speaker2 = &config.speaker2_name;
    let length = config.default_podcast_length;

    format!(
        "\
Creates a podcast between two people named {speaker1} and {speaker2}.

The podcast should be approximately {length} minutes when spoken unless the user asks otherwise \
(about 1275 words per 10 minutes in total). Make it sound like a real conversation with \
back-and-forth discussion, questions, insights, and occasional humor. Include an introduction \
where the hosts introduce themselves and the topic, and a conclusion where they wrap up. If the \
provided content is too lengthy, discuss only the most important points; if it is too brief, \
expand on it with relevant discussion and context.

Format the script like this:
{speaker1}: [Speaker 1's dialogue]
{speaker2}: [Speaker 2's dialogue]
...and so on.

Natural speech markers:
  [pause-short] for brief pauses (0.3s)
  [pause-medium] for medium pauses (0.7s)
  [pause-long] for longer pauses (1.2s)
  [emphasis]...[/emphasis] around emphasized words
  [breath] where speakers would naturally take a breath
  [thoughtful] for moments of consideration
Include filler words like \"um\", \"uh\", \"you know\" occasionally. Mark sound effects as \
[SOUND EFFECT: description] and transitions as [TRANSITION].

Pass the finished script to `generate_podcast`; it returns the path of the exported audio file."
    )
}
