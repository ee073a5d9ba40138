pub const HEADING: &str = "Here are some tips to help you practice mindfulness:";

pub const TIPS: [&str; 7] = [
    "1. Start with 5 minutes of mindful breathing (or however long you like).",
    "2. Focus on your senses: what can you hear, see, and feel? (What are you thinking about? Is there something you are trying to avoid?)",
    "3. Practice meditation when you're feeling stressed. Create a mental list in your head to organise your thoughts.",
    "4. Take a short mindful walk each day. Use this time to appreciate yourself. Ask yourself 'is my life where I want it to be right now?' or 'Would my younger self look up to me today?'",
    "5. Spend time with your loved ones. Play a game or watch something together.",
    "6. Doodle something random! Be however crazy you like!",
    "7. Keep a gratitude journal & reflect on your thoughts or simply jot down what made you happy today.",
];
