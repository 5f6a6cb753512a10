//! Few-shot prompt for subtask generation
//!
//! The instruction rides along with the first example turn, followed by three
//! worked task → JSON array exchanges, then the caller's task.

use focus_core::{PromptLanguage, Task};
use llm_client::ChatMessage;

struct FewShotSet {
    instruction: &'static str,
    task_label: &'static str,
    examples: [(&'static str, &'static str); 3],
}

const SPANISH: FewShotSet = FewShotSet {
    instruction: "Dada una tarea, genera una lista de entre 1 a 8 subtareas utilizando verbos en infinitivo que permitan resolverla.\nUsa textos con no más de 128 caracteres.",
    task_label: "Tarea",
    examples: [
        (
            "Aprender inglés",
            r#"["Aprender el alfabeto y la pronunciación", "Construir vocabulario básico", "Estudiar gramática", "Practicar la escucha", "Leer en inglés", "Escribir en inglés", "Hablar inglés", "Usar recursos"]"#,
        ),
        (
            "Ir de vacaciones a Torres del Paine, Chile",
            r#"["Investigar y elegir fechas", "Reservar alojamiento", "Planificar transporte", "Definir itinerario", "Preparar equipo", "Comprar entradas", "Organizar comidas"]"#,
        ),
        (
            "Aprender el framework NextJS",
            r#"["Aprender los fundamentos de React", "Configurar un entorno de desarrollo", "Explorar la estructura de un proyecto Next.js", "Aprender a crear páginas y enrutamiento", "Integrar datos y APIs"]"#,
        ),
    ],
};

const ENGLISH: FewShotSet = FewShotSet {
    instruction: "Given a task, generate a list of 1 to 8 subtasks, each starting with a verb, that together accomplish it.\nKeep every subtask under 128 characters.",
    task_label: "Task",
    examples: [
        (
            "Learn English",
            r#"["Learn the alphabet and pronunciation", "Build a basic vocabulary", "Study grammar", "Practice listening", "Read in English", "Write in English", "Speak English", "Use learning resources"]"#,
        ),
        (
            "Go on vacation to Torres del Paine, Chile",
            r#"["Research and choose dates", "Book accommodation", "Plan transportation", "Define the itinerary", "Prepare gear", "Buy park tickets", "Organize meals"]"#,
        ),
        (
            "Learn the NextJS framework",
            r#"["Learn the fundamentals of React", "Set up a development environment", "Explore the structure of a Next.js project", "Learn to create pages and routing", "Integrate data and APIs"]"#,
        ),
    ],
};

fn few_shot_set(language: PromptLanguage) -> &'static FewShotSet {
    match language {
        PromptLanguage::Es => &SPANISH,
        PromptLanguage::En => &ENGLISH,
    }
}

/// `"<label>: {title}"`, or `"<label>: {title} - {description}"`
pub fn task_turn(language: PromptLanguage, task: &Task) -> String {
    let label = few_shot_set(language).task_label;
    match task.description() {
        Some(description) => format!("{}: {} - {}", label, task.title, description),
        None => format!("{}: {}", label, task.title),
    }
}

/// Full conversation sent to the model for `task`
pub fn build_messages(language: PromptLanguage, task: &Task) -> Vec<ChatMessage> {
    let set = few_shot_set(language);
    let mut messages = Vec::with_capacity(set.examples.len() * 2 + 1);

    for (index, (example_task, example_answer)) in set.examples.iter().enumerate() {
        let turn = format!("{}: {}", set.task_label, example_task);
        let content = if index == 0 {
            format!("{}\n\n{}", set.instruction, turn)
        } else {
            turn
        };
        messages.push(ChatMessage::user(content));
        messages.push(ChatMessage::assistant(*example_answer));
    }

    messages.push(ChatMessage::user(task_turn(language, task)));
    messages
}
