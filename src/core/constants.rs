// Parameter names resolved from the parameter source.
pub const KAFKA_BROKER_URL: &str = "KAFKA_BROKER_URL";
pub const KAFKA_SCHEMA_REGISTRY_URL: &str = "KAFKA_SCHEMA_REGISTRY_URL";
pub const KAFKA_SCHEMA_REGISTRY_USERNAME: &str = "KAFKA_SCHEMA_REGISTRY_USERNAME";
pub const KAFKA_SCHEMA_REGISTRY_PASSWORD: &str = "KAFKA_SCHEMA_REGISTRY_PASSWORD";
pub const KAFKA_CA: &str = "KAFKA_CA";
pub const KAFKA_USER_KEY: &str = "KAFKA_USER_KEY";
pub const KAFKA_USER_CERT: &str = "KAFKA_USER_CERT";

// Certificate file names, joined onto the temp directory.
pub const CA_FILE_NAME: &str = "kafka_ca";
pub const USER_CERT_FILE_NAME: &str = "kafka_user_cert";
pub const USER_KEY_FILE_NAME: &str = "kafka_user_key";

// Container keys of the dotted view.
pub const BROKER_URL_KEY: &str = "kafka.broker.url";
pub const SCHEMA_REGISTRY_OPTIONS_KEY: &str = "kafka.schema.registry.options";
pub const SECURITY_OPTIONS_KEY: &str = "kafka.security.options";

pub const BOOTSTRAP_SERVERS: &str = "bootstrap.servers";
