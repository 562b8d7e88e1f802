use sea_orm::DatabaseConnection;

use crate::customer::domain::Customer;
use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// [`CustomerRepository`] backed by the `customers` table via SeaORM.
///
/// Delegates to the row-level helpers in `models::customer`; every statement
/// is parametrized and touches that table only.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

fn to_domain(row: models::customer::Model) -> Customer {
    Customer {
        id: row.id,
        firstname: row.firstname,
        lastname: row.lastname,
        street: row.street,
        postcode: row.postcode,
        city: row.city,
        country: row.country,
    }
}

fn to_row(customer: &Customer) -> models::customer::Model {
    models::customer::Model {
        id: customer.id,
        firstname: customer.firstname.clone(),
        lastname: customer.lastname.clone(),
        street: customer.street.clone(),
        postcode: customer.postcode.clone(),
        city: customer.city.clone(),
        country: customer.country.clone(),
    }
}

#[async_trait::async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn fetch_all(&self) -> Result<Vec<Customer>, ServiceError> {
        let rows = models::customer::find_all_ordered(&self.db).await?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn fetch_single_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        let row = models::customer::find_by_id(&self.db, id).await?;
        Ok(row.map(to_domain))
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, ServiceError> {
        if customer.id < 0 {
            return Err(ServiceError::Validation("id must not be negative".to_string()));
        }
        let saved = if customer.id == 0 {
            models::customer::insert(&self.db, to_row(customer)).await?
        } else {
            models::customer::update(&self.db, to_row(customer)).await?
        };
        Ok(to_domain(saved))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(models::customer::delete_by_id(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn sample(firstname: &str, lastname: &str) -> Customer {
        Customer {
            id: 0,
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            street: "Am Köpfen 124".to_string(),
            postcode: "21451".to_string(),
            city: "Hamburg".to_string(),
            country: "de".to_string(),
        }
    }

    #[tokio::test]
    async fn customer_crud_against_store() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCustomerRepository { db: get_db().await? };

        // insert assigns an id
        let horst = repo.save(&sample("Horst", "Hrubesch")).await?;
        assert!(horst.is_persisted());

        let anna = repo.save(&sample("Anna", "Abt")).await?;

        // ordering by lastname, then firstname
        let all = repo.fetch_all().await?;
        assert_eq!(all, vec![anna.clone(), horst.clone()]);

        // full-row update keeps the id
        let changed = Customer { firstname: "Monika".to_string(), ..horst.clone() };
        let updated = repo.save(&changed).await?;
        assert_eq!(updated.id, horst.id);
        assert_eq!(repo.fetch_single_by_id(horst.id).await?, Some(changed));

        // update against a missing id is NotFound
        let ghost = Customer { id: 4711, ..sample("Horst", "Hrubesch") };
        let err = repo.save(&ghost).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        // delete reports whether a row matched
        assert!(repo.delete(anna.id).await?);
        assert_eq!(repo.fetch_single_by_id(anna.id).await?, None);
        assert!(!repo.delete(anna.id).await?);

        Ok(())
    }
}
