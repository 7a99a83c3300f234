fn main() -> anyhow::Result<()> {
    agroexpo_lib::run()
}
