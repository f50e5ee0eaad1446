use std::fmt::Display;
use std::io::{BufRead, Write};

use larder_core::{GroceryCategory, ItemStore};
use larder_gemini::{DescriptionGenerator, TextGeneration};
use tracing::{debug, info};

use crate::error::ToolError;
use crate::form::ItemForm;
use crate::render::{render_category_menu, render_list};

const QUIT: &str = ":q";
const GENERATE: &str = "ai";

/// Line-oriented prompt over any reader/writer pair.
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Returns `None` on end of input or when the user quits.
    fn ask(&mut self, label: &str) -> Result<Option<String>, ToolError> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim();
        if line == QUIT {
            return Ok(None);
        }
        Ok(Some(line.to_string()))
    }

    fn say(&mut self, text: impl Display) -> Result<(), ToolError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> Result<(), ToolError> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// Blank keeps `current`; otherwise a menu number, label or key.
fn parse_category(answer: &str, current: GroceryCategory) -> Option<GroceryCategory> {
    if answer.is_empty() {
        return Some(current);
    }
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| GroceryCategory::ALL.get(i).copied());
    }
    answer.parse().ok()
}

/// Runs the add-item form until the user quits, printing the list after
/// every accepted submission.
pub async fn run<G, R, W>(
    store: &mut ItemStore,
    generator: &DescriptionGenerator<G>,
    input: R,
    output: W,
) -> Result<(), ToolError>
where
    G: TextGeneration,
    R: BufRead,
    W: Write,
{
    let mut io = Prompter { input, output };
    let mut form = ItemForm::new();

    io.say(format!("Enter {} at any prompt to finish.", QUIT))?;

    while fill_form(&mut io, &mut form, generator).await? {
        match form.submit() {
            Ok(candidate) => {
                let item = store.add_item(candidate);
                info!(id = %item.id, name = %item.name, "Item added");
                let added = format!("\nAdded \"{}\".\n", item.name);
                io.say(added)?;
                io.write_raw(&render_list(store.list_items()))?;
            }
            Err(err) => {
                debug!(error = %err, "Submission rejected");
                io.say(format!("\n{}", err))?;
            }
        }
    }

    io.output.flush()?;
    Ok(())
}

/// Prints one generated description (or the fallback text).
pub async fn describe<G, W>(
    generator: &DescriptionGenerator<G>,
    name: &str,
    category: GroceryCategory,
    mut output: W,
) -> Result<(), ToolError>
where
    G: TextGeneration,
    W: Write,
{
    let text = generator.generate_description(name, Some(category)).await?;
    writeln!(output, "{}", text)?;
    Ok(())
}

/// Prompts for every field. Returns `false` when the session should end.
async fn fill_form<G, R, W>(
    io: &mut Prompter<R, W>,
    form: &mut ItemForm,
    generator: &DescriptionGenerator<G>,
) -> Result<bool, ToolError>
where
    G: TextGeneration,
    R: BufRead,
    W: Write,
{
    io.say("\nAdd New Item")?;

    let Some(name) = io.ask("Item name")? else {
        return Ok(false);
    };
    form.name = name;

    io.write_raw(&render_category_menu())?;
    loop {
        let Some(answer) = io.ask(&format!("Category [{}]", form.category))? else {
            return Ok(false);
        };
        match parse_category(&answer, form.category) {
            Some(category) => {
                form.category = category;
                break;
            }
            None => io.say(format!("Unknown category \"{}\".", answer))?,
        }
    }

    let Some(price) = io.ask("Price ($)")? else {
        return Ok(false);
    };
    form.price = price;

    let Some(quantity) = io.ask("Quantity")? else {
        return Ok(false);
    };
    form.quantity = quantity;

    loop {
        let label = if form.description.is_empty() {
            format!("Description (optional, '{}' to generate)", GENERATE)
        } else {
            format!(
                "Description [{}] (Enter to keep, '{}' to regenerate)",
                form.description, GENERATE
            )
        };
        let Some(answer) = io.ask(&label)? else {
            return Ok(false);
        };

        if answer.eq_ignore_ascii_case(GENERATE) {
            io.say("Generating...")?;
            if let Err(err) = form.generate_description(generator).await {
                io.say(err)?;
            }
            continue;
        }
        if !answer.is_empty() {
            form.description = answer;
        }
        break;
    }

    let Some(image_url) = io.ask("Image URL (optional)")? else {
        return Ok(false);
    };
    form.image_url = image_url;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use larder_gemini::{DescriptionError, GeminiError, FALLBACK_DESCRIPTION};
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Scripted {
        reply: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(reply: Option<&'static str>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TextGeneration for Scripted {
        async fn generate_text(&self, _model: &str, _prompt: &str) -> Result<String, GeminiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .map(String::from)
                .ok_or(GeminiError::EmptyResponse)
        }
    }

    async fn drive(script: &str, backend: &Scripted) -> (ItemStore, String) {
        let mut store = ItemStore::new();
        let generator = DescriptionGenerator::new(backend);
        let mut output = Vec::new();

        run(&mut store, &generator, Cursor::new(script), &mut output)
            .await
            .unwrap();

        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn category_answers() {
        let current = GroceryCategory::Pantry;
        assert_eq!(parse_category("", current), Some(GroceryCategory::Pantry));
        assert_eq!(parse_category("1", current), Some(GroceryCategory::FruitsVegetables));
        assert_eq!(parse_category("8", current), Some(GroceryCategory::Other));
        assert_eq!(parse_category("0", current), None);
        assert_eq!(parse_category("9", current), None);
        assert_eq!(parse_category("frozen", current), Some(GroceryCategory::Frozen));
        assert_eq!(parse_category("Snacks", current), None);
    }

    #[tokio::test]
    async fn describe_prints_trimmed_text() {
        let backend = Scripted::new(Some(" Bold and smooth. "));
        let generator = DescriptionGenerator::new(&backend);
        let mut output = Vec::new();

        describe(&generator, "Cold Brew", GroceryCategory::Beverages, &mut output)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Bold and smooth.\n");
    }

    #[tokio::test]
    async fn describe_rejects_empty_name() {
        let backend = Scripted::new(Some("unused"));
        let generator = DescriptionGenerator::new(&backend);

        let err = describe(&generator, "", GroceryCategory::Other, Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ToolError::Description(DescriptionError::InvalidArgument)
        ));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn adds_item_with_generated_description() {
        let backend = Scripted::new(Some(" Crisp and fresh. "));
        let (store, output) = drive("Organic Apples\n1\n2.99\n50\nai\n\n\n:q\n", &backend).await;

        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.len(), 1);

        let item = store.latest().unwrap();
        assert_eq!(item.name, "Organic Apples");
        assert_eq!(item.category, GroceryCategory::FruitsVegetables);
        assert_eq!(item.price, 2.99);
        assert_eq!(item.quantity, 50);
        assert_eq!(item.description, "Crisp and fresh.");
        assert_eq!(item.image_url, None);

        assert!(output.contains("Added \"Organic Apples\"."));
        assert!(output.contains("$2.99"));
    }

    #[tokio::test]
    async fn failed_generation_puts_fallback_in_description() {
        let backend = Scripted::new(None);
        let (store, _) = drive("Baguette\nbakery\n3\n10\nai\n\n\n", &backend).await;

        assert_eq!(store.latest().unwrap().description, FALLBACK_DESCRIPTION);
    }

    #[tokio::test]
    async fn generation_without_name_is_refused() {
        let backend = Scripted::new(Some("unused"));
        let (store, output) = drive("\n\n1\n1\nai\n\n\n", &backend).await;

        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
        assert!(store.is_empty());
        assert!(output.contains("Please enter an item name first."));
        assert!(output.contains("Please fill in all required fields: Name, Price, and Quantity."));
    }

    #[tokio::test]
    async fn missing_price_blocks_submission() {
        let backend = Scripted::new(None);
        let (store, output) = drive("Milk\n2\n\n5\n\n\n", &backend).await;

        assert!(store.is_empty());
        assert!(output.contains("Please fill in all required fields"));
    }

    #[tokio::test]
    async fn unknown_category_is_asked_again() {
        let backend = Scripted::new(None);
        let (store, output) = drive("Tea\nSnacks\nBeverages\n4\n10\nLoose leaf.\n\n", &backend).await;

        assert!(output.contains("Unknown category \"Snacks\"."));
        assert_eq!(store.latest().unwrap().category, GroceryCategory::Beverages);
        assert_eq!(store.latest().unwrap().description, "Loose leaf.");
    }

    #[tokio::test]
    async fn list_is_printed_newest_first() {
        let backend = Scripted::new(None);
        let script = "Rice\npantry\n1.5\n3\n\n\nPeas\nfrozen\n2\n4\n\nfile:///peas.png\n";
        let (store, output) = drive(script, &backend).await;

        let names: Vec<&str> = store.list_items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Peas", "Rice"]);
        assert_eq!(store.latest().unwrap().image_url.as_deref(), Some("file:///peas.png"));

        let last_list = &output[output.rfind("Added \"Peas\"").unwrap()..];
        assert!(last_list.find("Peas  [Frozen]").unwrap() < last_list.find("Rice  [Pantry]").unwrap());
    }
}
