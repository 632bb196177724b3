//! Initial record sources for the in-memory store.

use tracing::warn;

use domain::{Password, ProfileDetails, UserRecord};

/// Supplies the records a store starts with.
pub trait UserSeed: Send + Sync {
    fn produce_initial_records(&self) -> Vec<UserRecord>;
}

/// Start with no accounts
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySeed;

impl UserSeed for EmptySeed {
    fn produce_initial_records(&self) -> Vec<UserRecord> {
        Vec::new()
    }
}

/// Start with a fixed set of already hashed records
#[derive(Debug, Clone, Default)]
pub struct FixtureSeed {
    records: Vec<UserRecord>,
}

impl FixtureSeed {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }
}

impl UserSeed for FixtureSeed {
    fn produce_initial_records(&self) -> Vec<UserRecord> {
        self.records.clone()
    }
}

/// (first name, second name, father name, email, password, address)
type DemoAccount = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    ("Валентин", "Козин", "Адамович", "valentin.kozin@hotmail.com", "yUxUh5gA", "Россия, г. Казань, Южная ул., д. 18 кв.29"),
    ("Светлана", "Кокоткина", "Ивановна", "svetlana05081967@mail.ru", "JN7TFiM!", "Россия, г. Новосибирск, Новая ул., д. 13 кв.166"),
    ("Даниил", "Каипов", "Петрович", "daniil04031970@ya.ru", "?Vd9BXKi", "Россия, г. Екатеринбург, Хуторская ул., д. 10 кв.29"),
    ("Марк", "Янышев", "Федотович", "mark.yanyshev@outlook.com", "tDKls9r*", "Россия, г. Саратов, Лесная ул., д. 3 кв.127"),
    ("Ульяна", "Чайка", "Прохоровна", "ulyana.chayka@gmail.com", "QgVeS5Qu", "Россия, г. Рязань, Парковая ул., д. 14 кв.65"),
    ("Георгий", "Суворин", "Никитьевич", "georgiy14061984@mail.ru", "NJiGPKyY", "Россия, г. Владивосток, Молодежная ул., д. 18 кв.122"),
];

/// Six demo accounts; passwords are hashed when the records are produced
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSeed;

impl DemoSeed {
    /// Plain text password of a demo account, for local testing
    pub fn password_for(email: &str) -> Option<&'static str> {
        DEMO_ACCOUNTS
            .iter()
            .find(|account| account.3 == email)
            .map(|account| account.4)
    }
}

impl UserSeed for DemoSeed {
    fn produce_initial_records(&self) -> Vec<UserRecord> {
        DEMO_ACCOUNTS
            .iter()
            .filter_map(|&(first_name, second_name, father_name, email, password, address)| {
                let password = match Password::new(password) {
                    Ok(password) => password,
                    Err(e) => {
                        warn!(email, error = %e, "Skipping demo account");
                        return None;
                    }
                };

                let details = ProfileDetails {
                    first_name: first_name.to_string(),
                    second_name: second_name.to_string(),
                    father_name: Some(father_name.to_string()),
                    address: address.to_string(),
                };
                Some(UserRecord::new(email.to_string(), details, password))
            })
            .collect()
    }
}
