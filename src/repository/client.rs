use diesel::prelude::*;

use crate::{
    domain::{
        client::{Client, NewClient, UpdateClient},
        types::ClientId,
    },
    models::client::{
        Client as DbClient, NewClient as DbNewClient, UpdateClient as DbUpdateClient,
    },
    repository::{
        ClientReader, ClientWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let client = clients::table
            .filter(clients::id.eq(id.to_string()))
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        client
            .map(Client::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let rows = clients::table
            .order(clients::seq.asc())
            .select(DbClient::as_select())
            .load::<DbClient>(&mut conn)?;

        let clients = rows
            .into_iter()
            .map(Client::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Loaded snapshot of {} clients", clients.len());
        Ok(clients)
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let id = ClientId::new().to_string();
        let insertable = DbNewClient::new(&id, new_client);

        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .returning(DbClient::as_returning())
            .get_result::<DbClient>(&mut conn)?;

        Ok(Client::try_from(created)?)
    }

    fn update_client(&self, id: ClientId, updates: &UpdateClient) -> RepositoryResult<Client> {
        use crate::schema::clients;

        if updates.is_empty() {
            return self.get_client_by_id(id)?.ok_or(RepositoryError::NotFound);
        }

        let mut conn = self.conn()?;
        let db_updates: DbUpdateClient = updates.into();

        let updated = diesel::update(clients::table.filter(clients::id.eq(id.to_string())))
            .set(&db_updates)
            .returning(DbClient::as_returning())
            .get_result::<DbClient>(&mut conn)?;

        Ok(Client::try_from(updated)?)
    }

    fn delete_client(&self, id: ClientId) -> RepositoryResult<()> {
        use crate::schema::clients;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(clients::table.filter(clients::id.eq(id.to_string())))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
