#[tokio::main]
async fn main() -> anyhow::Result<()> {
    spell_annotator_lib::run().await
}
