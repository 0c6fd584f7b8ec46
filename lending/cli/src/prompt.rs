use {colored_json::ToColoredJson, serde::Serialize};

pub fn confirm(prompt: impl ToString) -> dialoguer::Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt.to_string())
        .interact()
}

pub fn print_json_pretty<T>(data: T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_string_pretty(&data)?;
    let colored = json.to_colored_json_auto()?;

    println!("{colored}");

    Ok(())
}
