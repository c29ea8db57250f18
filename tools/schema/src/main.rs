use graphql::build_schema;
use repositories::EmployeeRepository;
use services::FormConfig;

fn main() -> std::io::Result<()> {
    let schema = build_schema(EmployeeRepository::new(), FormConfig::default());
    // Print the schema in SDL format
    println!("{}", &schema.sdl());
    Ok(())
}
