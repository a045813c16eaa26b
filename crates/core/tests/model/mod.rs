//! Domain types shared by the integration tests.

#![allow(dead_code)]

use core::fmt;

use rust_decimal::Decimal;
use uuid::Uuid;
use valuekit_core::{
    AsValueCollection, ComponentValue, Describe, EqualityComponent, PrimitiveValueObject,
    TypeDescriptor, ValueList, ValueObject, ValueObjectError, ValueObjectResult, enumeration,
    guard, impl_value_semantics, primitive_value_object, value_object,
};

#[derive(Debug, Clone)]
pub struct Address {
    street: String,
    house_number: String,
    post_code: String,
    city: String,
}

impl Address {
    pub fn new(
        street: &str,
        house_number: &str,
        post_code: &str,
        city: &str,
    ) -> ValueObjectResult<Self> {
        Ok(Self {
            street: guard::not_blank(street, "street")?.to_string(),
            house_number: guard::not_blank(house_number, "house_number")?.to_string(),
            post_code: guard::not_blank(post_code, "post_code")?.to_string(),
            city: guard::not_blank(city, "city")?.to_string(),
        })
    }
}

value_object!(Address { street, house_number, post_code, city });

#[derive(Debug, Clone)]
pub struct BankAccount {
    name: String,
    iban: String,
    bic: String,
}

impl BankAccount {
    pub fn new(name: &str, iban: &str, bic: &str) -> ValueObjectResult<Self> {
        Ok(Self {
            name: guard::not_blank(name, "name")?.to_string(),
            iban: guard::not_blank(iban, "iban")?.to_string(),
            bic: guard::not_blank(bic, "bic")?.to_string(),
        })
    }
}

value_object!(BankAccount { name, iban, bic });

/// A bank account restricted to German IBANs.
#[derive(Debug, Clone)]
pub struct GermanBankAccount {
    name: String,
    iban: String,
    bic: String,
}

impl GermanBankAccount {
    pub fn new(name: &str, iban: &str, bic: &str) -> ValueObjectResult<Self> {
        let BankAccount { name, iban, bic } = BankAccount::new(name, iban, bic)?;
        if !iban.starts_with("DE") {
            return Err(ValueObjectError::invalid_argument(
                "iban",
                "value cannot be a non-german IBAN",
            ));
        }
        Ok(Self { name, iban, bic })
    }
}

value_object!(GermanBankAccount: BankAccount { name, iban, bic });

#[derive(Debug, Clone)]
pub struct Country {
    two_letter_code: String,
}

impl Country {
    pub fn create(two_letter_code: &str) -> ValueObjectResult<Self> {
        Ok(Self {
            two_letter_code: guard::exact_length(two_letter_code, 2, "two_letter_code")?
                .to_string(),
        })
    }
}

value_object!(Country { two_letter_code });

#[derive(Debug, Clone)]
pub struct Confederation {
    name: String,
    member_countries: ValueList<Country>,
}

impl Confederation {
    pub fn new(name: &str, member_countries: Vec<Country>) -> ValueObjectResult<Self> {
        guard::not_blank(name, "name")?;
        guard::not_empty(&member_countries, "member_countries")?;

        Ok(Self {
            name: name.to_string(),
            member_countries: member_countries.as_value_list(),
        })
    }

    pub fn member_countries(&self) -> &ValueList<Country> {
        &self.member_countries
    }
}

value_object!(Confederation { name, member_countries });

#[derive(Debug, Clone)]
pub struct Empty;

value_object!(Empty {});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Currency {
    Euro,
    Dollar,
    Pound,
    Yuan,
    Yen,
}

enumeration!(Currency { Euro, Dollar, Pound, Yuan, Yen });

#[derive(Debug, Clone)]
pub struct Amount {
    quantity: Decimal,
    currency: Currency,
}

impl Amount {
    pub fn new(quantity: Decimal, currency: Currency) -> Self {
        Self { quantity, currency }
    }

    pub fn add(&self, other: &Amount) -> ValueObjectResult<Amount> {
        if self.currency != other.currency {
            return Err(ValueObjectError::invalid_argument(
                "other",
                "cannot add amounts with different currencies",
            ));
        }
        Ok(Amount::new(self.quantity + other.quantity, self.currency))
    }
}

value_object!(Amount { quantity, currency });

#[derive(Debug, Clone)]
pub struct Age(pub i32);
primitive_value_object!(Age(i32));

#[derive(Debug, Clone)]
pub struct IntValue(pub i32);
primitive_value_object!(IntValue(i32));

#[derive(Debug, Clone)]
pub struct StringValue(pub String);
primitive_value_object!(StringValue(String));

#[derive(Debug, Clone)]
pub struct GuidValue(pub Uuid);
primitive_value_object!(GuidValue(Uuid));

#[derive(Debug, Clone)]
pub struct EnumValue(pub Currency);
primitive_value_object!(EnumValue(Currency));

#[derive(Debug, Clone)]
pub struct OptionalName(pub Option<String>);
primitive_value_object!(OptionalName(Option<String>));

#[derive(Debug, Clone)]
pub struct Ratio(pub f64);
primitive_value_object!(partial Ratio(f64));

/// Post code primitive carrying a note that takes no part in equality.
#[derive(Debug, Clone)]
pub struct PostCode {
    value: String,
    pub note: Option<String>,
}

impl PostCode {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            note: None,
        }
    }
}

impl Describe for PostCode {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive_value_object::<PostCode, String>()
    }
}

impl ValueObject for PostCode {
    fn equality_components(&self) -> Vec<&dyn EqualityComponent> {
        vec![&self.value as &dyn EqualityComponent]
    }
}

impl PrimitiveValueObject for PostCode {
    type Value = String;

    fn wrap(value: String) -> Self {
        Self { value, note: None }
    }

    fn value(&self) -> &String {
        &self.value
    }
}

impl_value_semantics!(PostCode);

impl fmt::Display for PostCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Wraps a composite value object, which is not an allowed wrapped type.
#[derive(Debug, Clone)]
pub struct InvalidPrimitive(Address);

impl Describe for InvalidPrimitive {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive_value_object::<InvalidPrimitive, Address>()
    }
}

impl ValueObject for InvalidPrimitive {
    fn equality_components(&self) -> Vec<&dyn EqualityComponent> {
        vec![&self.0 as &dyn EqualityComponent]
    }
}

impl PrimitiveValueObject for InvalidPrimitive {
    type Value = Address;

    fn wrap(value: Address) -> Self {
        Self(value)
    }

    fn value(&self) -> &Address {
        &self.0
    }
}

impl_value_semantics!(InvalidPrimitive);

impl fmt::Display for InvalidPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ComponentValue::render(&self.0, f)
    }
}

pub fn test_address() -> Address {
    Address::new("Testgasse", "50", "11111", "Bremen").expect("valid address")
}

pub fn test_bank_account() -> BankAccount {
    BankAccount::new("Tester", "DE0000000000000", "ABCDFFXXX").expect("valid account")
}

pub fn test_german_bank_account(name: &str) -> GermanBankAccount {
    GermanBankAccount::new(name, "DE0000000000000", "ABCDFFXXX").expect("valid account")
}

pub fn european_union() -> Confederation {
    let members = ["FR", "DE", "AT"]
        .into_iter()
        .map(Country::create)
        .collect::<ValueObjectResult<Vec<_>>>()
        .expect("valid countries");
    Confederation::new("European Union", members).expect("valid confederation")
}
